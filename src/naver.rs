//! Binding of the [Naver Maps](https://navermaps.github.io/maps.js.ncp/)
//! JavaScript API that is loaded by a `<script>` tag.

use std::{cell::RefCell, rc::Rc, time::Duration};

use js_sys::{Function, Object, Promise, Reflect};
use leptos::window;
use wasm_bindgen::{prelude::*, JsCast};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlElement, ResizeObserver};

use quickgig_core::map::{
    Handler, MapEvent, MapLoader, MapOptions, MapProvider, MarkerIcon, Pixels,
};
use quickgig_entities::geo::{MapBbox, MapPoint};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["naver", "maps"])]
    type LatLng;

    #[wasm_bindgen(constructor, js_namespace = ["naver", "maps"])]
    fn new(lat: f64, lng: f64) -> LatLng;

    #[wasm_bindgen(method)]
    fn lat(this: &LatLng) -> f64;

    #[wasm_bindgen(method)]
    fn lng(this: &LatLng) -> f64;

    #[wasm_bindgen(js_namespace = ["naver", "maps"])]
    type LatLngBounds;

    #[wasm_bindgen(method, js_name = getSW)]
    fn get_sw(this: &LatLngBounds) -> LatLng;

    #[wasm_bindgen(method, js_name = getNE)]
    fn get_ne(this: &LatLngBounds) -> LatLng;

    #[wasm_bindgen(js_namespace = ["naver", "maps"])]
    type Size;

    #[wasm_bindgen(constructor, js_namespace = ["naver", "maps"])]
    fn new(width: u32, height: u32) -> Size;

    #[wasm_bindgen(js_namespace = ["naver", "maps"])]
    type Point;

    #[wasm_bindgen(constructor, js_namespace = ["naver", "maps"])]
    fn new(x: u32, y: u32) -> Point;

    #[wasm_bindgen(js_namespace = ["naver", "maps"], js_name = Map)]
    #[derive(Debug, Clone)]
    type NaverMap;

    #[wasm_bindgen(constructor, js_namespace = ["naver", "maps"], js_class = "Map")]
    fn new(element: &HtmlElement, options: &Object) -> NaverMap;

    #[wasm_bindgen(method, js_class = "Map", js_name = getBounds)]
    fn get_bounds(this: &NaverMap) -> LatLngBounds;

    #[wasm_bindgen(method, js_class = "Map", js_name = panTo)]
    fn pan_to(this: &NaverMap, pos: &LatLng);

    #[wasm_bindgen(js_namespace = ["naver", "maps"])]
    #[derive(Debug, Clone)]
    type Marker;

    #[wasm_bindgen(constructor, js_namespace = ["naver", "maps"])]
    fn new(options: &Object) -> Marker;

    #[wasm_bindgen(method, js_name = setIcon)]
    fn set_icon(this: &Marker, icon: &Object);

    #[wasm_bindgen(method, js_name = setZIndex)]
    fn set_z_index(this: &Marker, z_index: i32);

    #[wasm_bindgen(method, js_name = setMap)]
    fn set_map(this: &Marker, map: &JsValue);

    #[wasm_bindgen(js_namespace = ["naver", "maps", "Event"], js_name = addListener)]
    fn add_listener(target: &JsValue, event_name: &str, listener: &Function) -> JsValue;

    #[wasm_bindgen(js_namespace = ["naver", "maps", "Event"], js_name = removeListener)]
    fn remove_listener(listener: &JsValue);

    #[wasm_bindgen(js_namespace = ["naver", "maps", "Event"])]
    fn trigger(target: &JsValue, event_name: &str);
}

// Registered event listener together with the callback it invokes.
type MapListener = (JsValue, Closure<dyn Fn()>);
type MarkerListener = (JsValue, Closure<dyn Fn(JsValue)>);

type MapListeners = Rc<RefCell<Vec<MapListener>>>;

#[derive(Debug, Clone)]
pub struct NaverMapHandle {
    map: NaverMap,
    listeners: MapListeners,
}

pub struct NaverMarker {
    marker: Marker,
    on_click: RefCell<Option<MarkerListener>>,
}

/// Stops the resize observation and detaches all map listeners when dropped.
pub struct NaverGuard {
    observer: Option<ResizeObserver>,
    _on_resize: Closure<dyn Fn()>,
    listeners: MapListeners,
}

impl Drop for NaverGuard {
    fn drop(&mut self) {
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
        let listeners = std::mem::take(&mut *self.listeners.borrow_mut());
        for (listener, _) in &listeners {
            remove_listener(listener);
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NaverMaps;

fn lat_lng(pos: MapPoint) -> LatLng {
    LatLng::new(pos.lat(), pos.lng())
}

fn map_point(lat_lng: &LatLng) -> MapPoint {
    MapPoint::from_lat_lng_deg(lat_lng.lat(), lat_lng.lng())
}

fn js_object(properties: &[(&str, &JsValue)]) -> Object {
    let object = Object::new();
    for (key, value) in properties {
        if let Err(err) = Reflect::set(&object, &JsValue::from_str(key), value) {
            log::warn!("Unable to set property '{key}': {err:?}");
        }
    }
    object
}

fn icon_object(icon: &MarkerIcon) -> Object {
    let MarkerIcon {
        content,
        size: Pixels { x: width, y: height },
        anchor: Pixels { x, y },
        ..
    } = icon;
    js_object(&[
        ("content", &JsValue::from_str(content)),
        ("size", &JsValue::from(Size::new(*width, *height))),
        ("anchor", &JsValue::from(Point::new(*x, *y))),
    ])
}

const fn event_name(event: MapEvent) -> &'static str {
    match event {
        MapEvent::Click => "click",
        MapEvent::Idle => "idle",
    }
}

// The pointer event of the widget wraps the DOM event.
fn stop_propagation(event: &JsValue) {
    for key in ["domEvent", "originalEvent"] {
        let Ok(dom_event) = Reflect::get(event, &JsValue::from_str(key)) else {
            continue;
        };
        if let Some(dom_event) = dom_event.dyn_ref::<web_sys::Event>() {
            dom_event.stop_propagation();
        }
    }
}

impl MapProvider for NaverMaps {
    type Container = HtmlElement;
    type Map = NaverMapHandle;
    type Marker = NaverMarker;
    type ResizeGuard = NaverGuard;

    fn construct_map(&self, container: &HtmlElement, options: &MapOptions) -> NaverMapHandle {
        let MapOptions {
            center,
            zoom,
            min_zoom,
        } = *options;
        let options = js_object(&[
            ("center", &JsValue::from(lat_lng(center))),
            ("zoom", &JsValue::from(zoom)),
            ("minZoom", &JsValue::from(min_zoom)),
            ("mapTypeControl", &JsValue::FALSE),
            ("zoomControl", &JsValue::TRUE),
        ]);
        NaverMapHandle {
            map: NaverMap::new(container, &options),
            listeners: Rc::default(),
        }
    }

    fn construct_marker(
        &self,
        map: &NaverMapHandle,
        pos: MapPoint,
        icon: &MarkerIcon,
    ) -> NaverMarker {
        let target: &JsValue = &map.map;
        let options = js_object(&[
            ("position", &JsValue::from(lat_lng(pos))),
            ("map", target),
            ("icon", &JsValue::from(icon_object(icon))),
            ("zIndex", &JsValue::from(icon.z_index)),
        ]);
        NaverMarker {
            marker: Marker::new(&options),
            on_click: RefCell::new(None),
        }
    }

    fn set_icon(&self, marker: &NaverMarker, icon: &MarkerIcon) {
        marker.marker.set_icon(&icon_object(icon));
        marker.marker.set_z_index(icon.z_index);
    }

    fn remove_marker(&self, marker: NaverMarker) {
        if let Some((listener, _)) = marker.on_click.take() {
            remove_listener(&listener);
        }
        marker.marker.set_map(&JsValue::NULL);
    }

    fn pan_to(&self, map: &NaverMapHandle, pos: MapPoint) {
        map.map.pan_to(&lat_lng(pos));
    }

    fn bounds(&self, map: &NaverMapHandle) -> MapBbox {
        let bounds = map.map.get_bounds();
        MapBbox::new(map_point(&bounds.get_sw()), map_point(&bounds.get_ne()))
    }

    fn subscribe(&self, map: &NaverMapHandle, event: MapEvent, handler: Handler) {
        let callback = Closure::wrap(handler);
        let listener = add_listener(
            &map.map,
            event_name(event),
            callback.as_ref().unchecked_ref(),
        );
        map.listeners.borrow_mut().push((listener, callback));
    }

    fn on_marker_click(&self, marker: &NaverMarker, handler: Handler) {
        let callback = Closure::<dyn Fn(JsValue)>::new(move |event: JsValue| {
            stop_propagation(&event);
            handler();
        });
        let listener = add_listener(
            &marker.marker,
            "click",
            callback.as_ref().unchecked_ref(),
        );
        if let Some((previous, _)) = marker.on_click.replace(Some((listener, callback))) {
            remove_listener(&previous);
        }
    }

    fn observe_resize(&self, map: &NaverMapHandle, container: &HtmlElement) -> NaverGuard {
        let target: JsValue = map.map.clone().into();
        let on_resize = Closure::<dyn Fn()>::new(move || trigger(&target, "resize"));
        let observer = match ResizeObserver::new(on_resize.as_ref().unchecked_ref()) {
            Ok(observer) => {
                observer.observe(container);
                Some(observer)
            }
            Err(err) => {
                log::warn!("Unable to observe the size of the map container: {err:?}");
                None
            }
        };
        NaverGuard {
            observer,
            _on_resize: on_resize,
            listeners: Rc::clone(&map.listeners),
        }
    }
}

/// Probes the global `naver.maps` namespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaverLoader;

impl MapLoader for NaverLoader {
    type Provider = NaverMaps;

    fn try_load(&self) -> Option<NaverMaps> {
        let global = js_sys::global();
        let map_class = Reflect::get(&global, &JsValue::from_str("naver"))
            .and_then(|naver| Reflect::get(&naver, &JsValue::from_str("maps")))
            .and_then(|maps| Reflect::get(&maps, &JsValue::from_str("Map")));
        map_class.is_ok_and(|class| class.is_function()).then_some(NaverMaps)
    }
}

pub async fn sleep(duration: Duration) {
    let millis = i32::try_from(duration.as_millis()).unwrap_or(i32::MAX);
    let promise = Promise::new(&mut |resolve, _| {
        if let Err(err) =
            window().set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis)
        {
            log::warn!("Unable to set timeout: {err:?}");
        }
    });
    if let Err(err) = JsFuture::from(promise).await {
        log::warn!("Timeout failed: {err:?}");
    }
}
