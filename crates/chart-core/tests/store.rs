// File: crates/chart-core/tests/store.rs
// Purpose: Validate selection rules and synchronous change notifications.

use std::cell::RefCell;
use std::rc::Rc;

use touchchart_core::{DataPoint, Series, StoreEvent, ValueStore};

#[derive(Debug, PartialEq)]
enum Seen {
    Replaced { len: usize, generation: u64 },
    Selected { previous: usize, selected: usize },
}

fn months() -> Series {
    vec![DataPoint::new("Jan", 10.0), DataPoint::new("Feb", 40.0), DataPoint::new("Mar", 25.0)]
        .into_iter()
        .collect()
}

fn recorded(store: &mut ValueStore) -> Rc<RefCell<Vec<Seen>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    store.subscribe(move |event| {
        sink.borrow_mut().push(match *event {
            StoreEvent::SeriesReplaced { series, generation } => Seen::Replaced { len: series.len(), generation },
            StoreEvent::SelectionChanged { previous, selected } => Seen::Selected { previous, selected },
        });
    });
    log
}

#[test]
fn in_range_selection_updates_and_notifies_once() {
    let mut store = ValueStore::new(months());
    let log = recorded(&mut store);

    assert!(store.select_index(2));
    assert_eq!(store.selected_index(), 2);
    assert_eq!(*log.borrow(), vec![Seen::Selected { previous: 0, selected: 2 }]);
}

#[test]
fn out_of_range_selection_is_a_silent_noop() {
    let mut store = ValueStore::new(months());
    let log = recorded(&mut store);

    assert!(!store.select_index(5));
    assert!(!store.select_index(3));
    assert_eq!(store.selected_index(), 0);
    assert!(log.borrow().is_empty());
}

#[test]
fn empty_series_rejects_every_selection() {
    let mut store = ValueStore::new(Series::new());
    assert!(!store.select_index(0));
    assert!(store.selection_is_stale());
}

#[test]
fn replacing_series_keeps_stale_selection() {
    let mut store = ValueStore::new(months());
    let log = recorded(&mut store);
    assert!(store.select_index(2));

    store.replace_series(vec![DataPoint::new("Apr", 1.0)].into_iter().collect());

    assert_eq!(store.selected_index(), 2);
    assert!(store.selection_is_stale());
    assert_eq!(store.generation(), 1);
    assert_eq!(
        *log.borrow(),
        vec![Seen::Selected { previous: 0, selected: 2 }, Seen::Replaced { len: 1, generation: 1 }]
    );

    // Still only in-range indices of the new series are accepted.
    assert!(!store.select_index(1));
    assert!(store.select_index(0));
    assert!(!store.selection_is_stale());
}

#[test]
fn initial_selection_is_not_validated() {
    let store = ValueStore::with_selection(months(), 7);
    assert_eq!(store.selected_index(), 7);
    assert!(store.selection_is_stale());
}

#[test]
fn unsubscribed_observers_stop_receiving() {
    let mut store = ValueStore::new(months());
    let count = Rc::new(RefCell::new(0usize));
    let c = Rc::clone(&count);
    let id = store.subscribe(move |_| *c.borrow_mut() += 1);

    store.select_index(1);
    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    store.select_index(2);
    store.replace_series(Series::new());

    assert_eq!(*count.borrow(), 1);
}

#[test]
fn observers_run_in_subscription_order() {
    let mut store = ValueStore::new(months());
    let order = Rc::new(RefCell::new(Vec::new()));
    for tag in ["first", "second"] {
        let o = Rc::clone(&order);
        store.subscribe(move |_| o.borrow_mut().push(tag));
    }
    store.select_index(1);
    assert_eq!(*order.borrow(), vec!["first", "second"]);
}

#[test]
fn scale_follows_current_series() {
    let mut store = ValueStore::new(months());
    assert_eq!(store.scale().max_value, 40.0);
    store.replace_series(Series::new());
    assert_eq!((store.scale().min_value, store.scale().max_value), (0.0, 1.0));
}
