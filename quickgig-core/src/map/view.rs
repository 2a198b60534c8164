use std::rc::Rc;

use quickgig_entities::{geo::*, id::*, listing::*};

use super::*;

pub type OnSelect = Rc<dyn Fn(Option<Id>)>;
pub type OnBboxChanged = Rc<dyn Fn(MapBbox)>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapSettings {
    /// Initial center if there are no listings.
    pub fallback_center: MapPoint,
    pub zoom: u8,
    pub min_zoom: u8,
    pub marker_label: MarkerLabel,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            fallback_center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            min_zoom: DEFAULT_MIN_ZOOM,
            marker_label: MarkerLabel::default(),
        }
    }
}

/// Lifecycle of a mounted map.
pub enum MapState<P: MapProvider> {
    /// The widget API has not been loaded yet.
    Unready,
    /// The widget API is available, but no map has been constructed.
    Ready(P),
    Initialized(MapView<P>),
}

impl<P: MapProvider> Default for MapState<P> {
    fn default() -> Self {
        Self::Unready
    }
}

impl<P> MapState<P>
where
    P: MapProvider + Clone + 'static,
    P::Map: Clone + 'static,
{
    pub const fn is_unready(&self) -> bool {
        matches!(self, Self::Unready)
    }

    pub fn provider_ready(&mut self, provider: P) {
        if !self.is_unready() {
            log::warn!("Map provider is already available");
            return;
        }
        log::debug!("Map provider is ready");
        *self = Self::Ready(provider);
    }

    /// Construct the map, at most once.
    ///
    /// Returns `false` if the provider is not ready yet or the map
    /// has already been constructed.
    pub fn initialize(
        &mut self,
        container: &P::Container,
        listings: &[&Listing],
        settings: &MapSettings,
        on_select: OnSelect,
        on_bbox_changed: OnBboxChanged,
    ) -> bool {
        let provider = match std::mem::take(self) {
            Self::Ready(provider) => provider,
            other => {
                *self = other;
                return false;
            }
        };
        let view = MapView::new(
            provider,
            container,
            listings,
            settings,
            on_select,
            on_bbox_changed,
        );
        *self = Self::Initialized(view);
        true
    }

    pub fn view_mut(&mut self) -> Option<&mut MapView<P>> {
        match self {
            Self::Initialized(view) => Some(view),
            _ => None,
        }
    }
}

/// A constructed map with its markers.
pub struct MapView<P: MapProvider> {
    provider: P,
    map: P::Map,
    markers: Vec<(Id, P::Marker)>,
    selected: Option<Id>,
    synced: bool,
    marker_label: MarkerLabel,
    on_select: OnSelect,
    _resize_guard: P::ResizeGuard,
}

impl<P> MapView<P>
where
    P: MapProvider + Clone + 'static,
    P::Map: Clone + 'static,
{
    fn new(
        provider: P,
        container: &P::Container,
        listings: &[&Listing],
        settings: &MapSettings,
        on_select: OnSelect,
        on_bbox_changed: OnBboxChanged,
    ) -> Self {
        let center = listings
            .first()
            .map_or(settings.fallback_center, |l| l.pos);
        log::debug!("Construct map at {center}");
        let options = MapOptions {
            center,
            zoom: settings.zoom,
            min_zoom: settings.min_zoom,
        };
        let map = provider.construct_map(container, &options);

        let on_click = Rc::clone(&on_select);
        provider.subscribe(&map, MapEvent::Click, Box::new(move || on_click(None)));

        let idle_provider = provider.clone();
        let idle_map = map.clone();
        provider.subscribe(
            &map,
            MapEvent::Idle,
            Box::new(move || on_bbox_changed(idle_provider.bounds(&idle_map))),
        );

        let resize_guard = provider.observe_resize(&map, container);

        Self {
            provider,
            map,
            markers: vec![],
            selected: None,
            synced: false,
            marker_label: settings.marker_label,
            on_select,
            _resize_guard: resize_guard,
        }
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Bring the markers in line with the listings and the selection.
    ///
    /// A changed set of listings rebuilds all markers. If only the
    /// selection changed the icons are updated in place.
    pub fn sync(&mut self, listings: &[&Listing], selected: Option<&Id>) {
        let same_listings = self.synced
            && self.markers.len() == listings.len()
            && self
                .markers
                .iter()
                .zip(listings)
                .all(|((id, _), l)| *id == l.id);
        let selection_changed = self.selected.as_ref() != selected;
        if !same_listings {
            self.rebuild(listings, selected);
        } else if selection_changed {
            self.refresh(listings, selected);
        }
        if selection_changed {
            if let Some(listing) = selected.and_then(|id| listings.iter().find(|l| &l.id == id)) {
                self.provider.pan_to(&self.map, listing.pos);
            }
        }
        self.selected = selected.cloned();
        self.synced = true;
    }

    fn rebuild(&mut self, listings: &[&Listing], selected: Option<&Id>) {
        log::debug!(
            "Rebuild markers: {} -> {}",
            self.markers.len(),
            listings.len()
        );
        for (_, marker) in self.markers.drain(..) {
            self.provider.remove_marker(marker);
        }
        for listing in listings {
            let active = selected == Some(&listing.id);
            let icon = marker_icon(listing, active, self.marker_label);
            let marker = self.provider.construct_marker(&self.map, listing.pos, &icon);
            let on_select = Rc::clone(&self.on_select);
            let id = listing.id.clone();
            self.provider
                .on_marker_click(&marker, Box::new(move || on_select(Some(id.clone()))));
            self.markers.push((listing.id.clone(), marker));
        }
    }

    fn refresh(&self, listings: &[&Listing], selected: Option<&Id>) {
        for ((_, marker), listing) in self.markers.iter().zip(listings) {
            let active = selected == Some(&listing.id);
            let icon = marker_icon(listing, active, self.marker_label);
            self.provider.set_icon(marker, &icon);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::usecases::tests::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        ConstructMap(MapPoint),
        ConstructMarker(u32, MapPoint, i32),
        SetIcon(u32, i32),
        RemoveMarker(u32),
        PanTo(MapPoint),
        Subscribe(MapEvent),
        ObserveResize,
        ReleaseResize,
    }

    #[derive(Default)]
    struct Widget {
        calls: Vec<Call>,
        next_marker: u32,
        map_handlers: Vec<(MapEvent, Handler)>,
        marker_handlers: Vec<(u32, Handler)>,
        bounds: MapBbox,
    }

    #[derive(Clone, Default)]
    struct FakeProvider(Rc<RefCell<Widget>>);

    struct FakeGuard(Rc<RefCell<Widget>>);

    impl Drop for FakeGuard {
        fn drop(&mut self) {
            self.0.borrow_mut().calls.push(Call::ReleaseResize);
        }
    }

    impl FakeProvider {
        fn calls(&self) -> Vec<Call> {
            self.0.borrow().calls.clone()
        }

        fn clear_calls(&self) {
            self.0.borrow_mut().calls.clear();
        }

        fn fire(&self, event: MapEvent) {
            let handlers = std::mem::take(&mut self.0.borrow_mut().map_handlers);
            for (e, h) in &handlers {
                if *e == event {
                    h();
                }
            }
            self.0.borrow_mut().map_handlers = handlers;
        }

        fn click_marker(&self, marker: u32) {
            let handlers = std::mem::take(&mut self.0.borrow_mut().marker_handlers);
            for (m, h) in &handlers {
                if *m == marker {
                    h();
                }
            }
            self.0.borrow_mut().marker_handlers = handlers;
        }
    }

    impl MapProvider for FakeProvider {
        type Container = ();
        type Map = ();
        type Marker = u32;
        type ResizeGuard = FakeGuard;

        fn construct_map(&self, _: &(), options: &MapOptions) {
            self.0
                .borrow_mut()
                .calls
                .push(Call::ConstructMap(options.center));
        }

        fn construct_marker(&self, _: &(), pos: MapPoint, icon: &MarkerIcon) -> u32 {
            let mut w = self.0.borrow_mut();
            let marker = w.next_marker;
            w.next_marker += 1;
            w.calls.push(Call::ConstructMarker(marker, pos, icon.z_index));
            marker
        }

        fn set_icon(&self, marker: &u32, icon: &MarkerIcon) {
            self.0
                .borrow_mut()
                .calls
                .push(Call::SetIcon(*marker, icon.z_index));
        }

        fn remove_marker(&self, marker: u32) {
            let mut w = self.0.borrow_mut();
            w.marker_handlers.retain(|(m, _)| *m != marker);
            w.calls.push(Call::RemoveMarker(marker));
        }

        fn pan_to(&self, _: &(), pos: MapPoint) {
            self.0.borrow_mut().calls.push(Call::PanTo(pos));
        }

        fn bounds(&self, _: &()) -> MapBbox {
            self.0.borrow().bounds
        }

        fn subscribe(&self, _: &(), event: MapEvent, handler: Handler) {
            let mut w = self.0.borrow_mut();
            w.calls.push(Call::Subscribe(event));
            w.map_handlers.push((event, handler));
        }

        fn on_marker_click(&self, marker: &u32, handler: Handler) {
            self.0.borrow_mut().marker_handlers.push((*marker, handler));
        }

        fn observe_resize(&self, _: &(), _: &()) -> FakeGuard {
            self.0.borrow_mut().calls.push(Call::ObserveResize);
            FakeGuard(Rc::clone(&self.0))
        }
    }

    struct Recorder {
        selections: Rc<RefCell<Vec<Option<Id>>>>,
        bboxes: Rc<RefCell<Vec<MapBbox>>>,
    }

    impl Recorder {
        fn new() -> Self {
            Self {
                selections: Rc::default(),
                bboxes: Rc::default(),
            }
        }

        fn on_select(&self) -> OnSelect {
            let selections = Rc::clone(&self.selections);
            Rc::new(move |id| selections.borrow_mut().push(id))
        }

        fn on_bbox_changed(&self) -> OnBboxChanged {
            let bboxes = Rc::clone(&self.bboxes);
            Rc::new(move |bbox| bboxes.borrow_mut().push(bbox))
        }
    }

    fn initialized(
        provider: &FakeProvider,
        listings: &[&Listing],
        recorder: &Recorder,
    ) -> MapState<FakeProvider> {
        let mut state = MapState::default();
        state.provider_ready(provider.clone());
        assert!(state.initialize(
            &(),
            listings,
            &MapSettings::default(),
            recorder.on_select(),
            recorder.on_bbox_changed(),
        ));
        state
    }

    #[test]
    fn cannot_initialize_before_ready() {
        let recorder = Recorder::new();
        let mut state = MapState::<FakeProvider>::default();
        assert!(state.is_unready());
        assert!(!state.initialize(
            &(),
            &[],
            &MapSettings::default(),
            recorder.on_select(),
            recorder.on_bbox_changed(),
        ));
        assert!(state.is_unready());
        assert!(state.view_mut().is_none());
    }

    #[test]
    fn initialize_only_once() {
        let provider = FakeProvider::default();
        let recorder = Recorder::new();
        let mut state = initialized(&provider, &[], &recorder);
        assert!(!state.initialize(
            &(),
            &[],
            &MapSettings::default(),
            recorder.on_select(),
            recorder.on_bbox_changed(),
        ));
        assert!(state.view_mut().is_some());
        state.provider_ready(provider.clone());
        assert!(state.view_mut().is_some());
        let constructed = provider
            .calls()
            .into_iter()
            .filter(|c| matches!(c, Call::ConstructMap(_)))
            .count();
        assert_eq!(constructed, 1);
    }

    #[test]
    fn center_on_first_listing_or_fallback() {
        let listings = sample_listings();
        let all: Vec<_> = listings.iter().collect();
        let recorder = Recorder::new();

        let provider = FakeProvider::default();
        let _state = initialized(&provider, &all, &recorder);
        assert_eq!(provider.calls()[0], Call::ConstructMap(listings[0].pos));

        let provider = FakeProvider::default();
        let _state = initialized(&provider, &[], &recorder);
        assert_eq!(provider.calls()[0], Call::ConstructMap(DEFAULT_CENTER));
        assert!(provider.calls().contains(&Call::Subscribe(MapEvent::Click)));
        assert!(provider.calls().contains(&Call::Subscribe(MapEvent::Idle)));
        assert!(provider.calls().contains(&Call::ObserveResize));
    }

    #[test]
    fn resize_observation_is_released_with_the_view() {
        let provider = FakeProvider::default();
        let recorder = Recorder::new();
        let state = initialized(&provider, &[], &recorder);
        assert!(!provider.calls().contains(&Call::ReleaseResize));
        drop(state);
        assert!(provider.calls().contains(&Call::ReleaseResize));
    }

    #[test]
    fn rebuild_markers_when_listings_change() {
        let listings = sample_listings();
        let all: Vec<_> = listings.iter().collect();
        let provider = FakeProvider::default();
        let recorder = Recorder::new();
        let mut state = initialized(&provider, &all, &recorder);
        let view = state.view_mut().unwrap();

        view.sync(&all, None);
        assert_eq!(view.marker_count(), 3);

        provider.clear_calls();
        view.sync(&all[..1], None);
        assert_eq!(view.marker_count(), 1);
        assert_eq!(
            provider.calls(),
            vec![
                Call::RemoveMarker(0),
                Call::RemoveMarker(1),
                Call::RemoveMarker(2),
                Call::ConstructMarker(3, listings[0].pos, INACTIVE_Z_INDEX),
            ]
        );

        provider.clear_calls();
        view.sync(&all[..1], None);
        assert!(provider.calls().is_empty());
    }

    #[test]
    fn refresh_icons_in_place_when_only_the_selection_changes() {
        let listings = sample_listings();
        let all: Vec<_> = listings.iter().collect();
        let provider = FakeProvider::default();
        let recorder = Recorder::new();
        let mut state = initialized(&provider, &all, &recorder);
        let view = state.view_mut().unwrap();
        view.sync(&all, None);

        provider.clear_calls();
        let selected = Id::from("2");
        view.sync(&all, Some(&selected));
        assert_eq!(
            provider.calls(),
            vec![
                Call::SetIcon(0, INACTIVE_Z_INDEX),
                Call::SetIcon(1, ACTIVE_Z_INDEX),
                Call::SetIcon(2, INACTIVE_Z_INDEX),
                Call::PanTo(listings[1].pos),
            ]
        );

        provider.clear_calls();
        view.sync(&all, None);
        assert_eq!(provider.calls().len(), 3);
        assert!(!provider
            .calls()
            .iter()
            .any(|c| matches!(c, Call::PanTo(_))));
    }

    #[test]
    fn rebuilt_markers_show_the_selection() {
        let listings = sample_listings();
        let all: Vec<_> = listings.iter().collect();
        let provider = FakeProvider::default();
        let recorder = Recorder::new();
        let mut state = initialized(&provider, &all, &recorder);
        let selected = Id::from("3");
        state.view_mut().unwrap().sync(&all, Some(&selected));
        let calls = provider.calls();
        assert!(calls.contains(&Call::ConstructMarker(2, listings[2].pos, ACTIVE_Z_INDEX)));
        assert!(calls.contains(&Call::ConstructMarker(0, listings[0].pos, INACTIVE_Z_INDEX)));
        assert_eq!(calls.last(), Some(&Call::PanTo(listings[2].pos)));
    }

    #[test]
    fn forward_widget_events() {
        let listings = sample_listings();
        let all: Vec<_> = listings.iter().collect();
        let provider = FakeProvider::default();
        let recorder = Recorder::new();
        let mut state = initialized(&provider, &all, &recorder);
        state.view_mut().unwrap().sync(&all, None);

        provider.click_marker(1);
        provider.fire(MapEvent::Click);
        assert_eq!(
            *recorder.selections.borrow(),
            vec![Some(Id::from("2")), None]
        );

        provider.0.borrow_mut().bounds = south_bbox();
        provider.fire(MapEvent::Idle);
        assert_eq!(*recorder.bboxes.borrow(), vec![south_bbox()]);
    }
}
