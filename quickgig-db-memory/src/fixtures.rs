use rand::{rngs::StdRng, Rng, SeedableRng};

use quickgig_entities::{category::*, geo::*, listing::*, price::*, review::*};

const GENERATED_COUNT: usize = 30;
const GENERATED_SEED: u64 = 0x5eed_9196;

fn picsum(seed: &str, width: u16, height: u16) -> String {
    format!("https://picsum.photos/seed/{seed}/{width}/{height}")
}

fn photo(seed: &str) -> String {
    picsum(seed, 800, 600)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

fn default_detail() -> ListingDetail {
    ListingDetail {
        structure: Some(Structure {
            rooms: 1,
            bathrooms: 1,
            kitchens: 1,
            living_rooms: 0,
        }),
        property_type: Some("오피스텔".into()),
        area: Some("20m² (6평)".into()),
        elevator: Some("있음".into()),
        parking: Some("주차 가능".into()),
        basic_options: strings(&[
            "냉장고", "세탁기", "에어컨", "와이파이", "싱크대", "인덕션", "침대",
        ]),
        additional_options: strings(&[
            "도어락",
            "CCTV",
            "식탁",
            "전자레인지",
            "책상",
            "옷장",
            "신발장",
            "발코니/베란다",
        ]),
        usage_guide: Some(
            "당일 예약은 확인 후 가능합니다. 입주는 비대면으로 진행되며 입실은 14:00시 이후, 퇴실은 12:00시 이전입니다."
                .into(),
        ),
        maintenance_items: strings(&["인터넷 요금", "공용공간 청소비", "건물관리비(CCTV 등)"]),
        host: Some(Host {
            name: "나진협 파트너".into(),
            image_url: "https://i.pravatar.cc/150?u=host1".into(),
            intro: "안녕하세요! 성심성의껏 최선을 다해 도와드리겠습니다.".into(),
        }),
    }
}

fn hand_written() -> Vec<Listing> {
    vec![
        Listing {
            id: "1".into(),
            category: Category::Cleaning,
            title: "성동구 옥수동 오피스텔 입주청소".into(),
            location: "성동구 옥수동 123-4".into(),
            description: "옥수역 인근 풀옵션 오피스텔 청소 전문가를 모십니다. 구석구석 꼼꼼하게 새집처럼 만들어 드립니다.".into(),
            tags: strings(&["방1", "화장실1", "주방1", "거실1"]),
            price: Price::new(150_000, PriceUnit::PerJob),
            image_url: photo("clean1"),
            images: ["clean1", "clean1_2", "clean1_3", "clean1_4"]
                .into_iter()
                .map(photo)
                .collect(),
            pos: MapPoint::from_lat_lng_deg(37.545, 127.012),
            rating: 4.8,
            review_count: 124,
            popular: true,
            detail: Some(ListingDetail {
                usage_guide: Some("입주 전 최소 3일 전 예약 권장합니다.".into()),
                ..default_detail()
            }),
        },
        Listing {
            id: "2".into(),
            category: Category::PetWalking,
            title: "상도동 골든리트리버 저녁 산책".into(),
            location: "동작구 상도동 55-1".into(),
            description: "성격 좋은 3살 리트리버 대박이와 함께 1시간 정도 즐겁게 산책하실 분 구합니다.".into(),
            tags: strings(&["대형견가능", "주말우대"]),
            price: Price::new(25_000, PriceUnit::PerHour),
            image_url: photo("dog1"),
            images: ["dog1", "dog2", "dog3"].into_iter().map(photo).collect(),
            pos: MapPoint::from_lat_lng_deg(37.502, 126.947),
            rating: 4.9,
            review_count: 56,
            popular: true,
            detail: Some(ListingDetail {
                property_type: Some("아파트 단지 내".into()),
                basic_options: strings(&["리드줄 제공", "배변봉투 제공", "간식 제공"]),
                host: Some(Host {
                    name: "이민수".into(),
                    image_url: "https://i.pravatar.cc/150?u=host2".into(),
                    intro: "반려견을 진심으로 아끼시는 분을 찾습니다.".into(),
                }),
                ..default_detail()
            }),
        },
        Listing {
            id: "3".into(),
            category: Category::Moving,
            title: "서대문구 원룸 소형 용달 이사".into(),
            location: "서대문구 북가좌동 77-2".into(),
            description: "1인 가구 원룸 이사입니다. 박스 짐 10개 정도이며 큰 가구는 없습니다.".into(),
            tags: strings(&["명지대 주차o", "깔끔원룸"]),
            price: Price::new(80_000, PriceUnit::PerJob),
            image_url: photo("move1"),
            images: ["move1", "move2"].into_iter().map(photo).collect(),
            pos: MapPoint::from_lat_lng_deg(37.581, 126.911),
            rating: 4.7,
            review_count: 89,
            popular: false,
            detail: Some(ListingDetail {
                property_type: Some("빌라".into()),
                parking: Some("지상 주차장 이용".into()),
                ..default_detail()
            }),
        },
    ]
}

fn generated(rng: &mut impl Rng, index: usize) -> Listing {
    let (category, price) = match index % 3 {
        0 => (Category::Cleaning, Price::new(200_000, PriceUnit::PerJob)),
        1 => (Category::PetWalking, Price::new(20_000, PriceUnit::PerHour)),
        _ => (Category::Moving, Price::new(100_000, PriceUnit::PerJob)),
    };
    let lat = 37.5 + rng.gen_range(-0.1..0.1);
    let lng = 127.0 + rng.gen_range(-0.1..0.1);
    let rating = 4.0 + rng.gen::<f64>();
    let review_count = rng.gen_range(0..100);
    let image_seed = format!("extra{index}");
    Listing {
        id: format!("extra-{index}").into(),
        category,
        title: format!("{} 전문 서비스 - {}번지", category.label(), index + 1),
        location: format!("서울시 어느 동 {}번지", index + 10),
        description: "믿고 맡겨주시면 만족하실 수 있는 최고의 서비스를 약속드립니다.".into(),
        tags: strings(&["전문가", "신속정확"]),
        price,
        image_url: photo(&image_seed),
        images: vec![photo(&image_seed), photo(&format!("{image_seed}_2"))],
        pos: MapPoint::from_lat_lng_deg(lat, lng),
        rating,
        review_count,
        popular: false,
        detail: Some(default_detail()),
    }
}

pub fn listings() -> Vec<Listing> {
    let mut rng = StdRng::seed_from_u64(GENERATED_SEED);
    let mut listings = hand_written();
    listings.extend((0..GENERATED_COUNT).map(|i| generated(&mut rng, i)));
    listings
}

pub fn reviews() -> Vec<Review> {
    vec![Review {
        id: "r1".into(),
        author: "김*현".into(),
        rating: ReviewRating::max(),
        content: "청소가 너무 깔끔해요. 덕분에 기분 좋게 입주했습니다.".into(),
        location: "서울 성동구".into(),
        listing_title: "성동구 옥수동 오피스텔 입주청소".into(),
        image_url: picsum("rev1", 400, 300),
    }]
}
