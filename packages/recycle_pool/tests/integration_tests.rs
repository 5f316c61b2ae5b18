//! Integration tests for the `recycle_pool` package.
//!
//! These tests exercise `Pool`, `Generator` and the shared array generators through the public
//! API only, following the lifecycle an application would use.

use std::cell::Cell;
use std::rc::Rc;

use recycle_pool::{
    CreationMode, DeleteAmount, Fraction, Generator, Options, Pool, Regenerate, Template, arrays,
    generate,
};

#[derive(Clone, Debug, Default, PartialEq)]
struct Point {
    x: i32,
    y: i32,
}

fn point_generator(count: usize) -> Generator<Point, (i32, i32)> {
    generate(
        Template::constructor(Point::default),
        Options::new()
            .count(count)
            .init(|point: &mut Point, (x, y): (i32, i32)| {
                point.x = x;
                point.y = y;
            })
            .clear(|point| {
                point.x = 0;
                point.y = 0;
            }),
    )
}

#[test]
fn pool_release_and_get() {
    let mut pool = Pool::new();
    pool.release(Point::default());

    assert_eq!(pool.count(), 1);
    assert_eq!(pool.get(), Some(Point::default()));
    assert_eq!(pool.count(), 0);
    assert_eq!(pool.get(), None);
}

#[test]
fn pool_is_lifo_for_any_sequence() {
    let mut pool = Pool::new();
    let released = ["a", "b", "c", "d"];

    for item in released {
        pool.release(item);
    }

    let taken: Vec<_> = std::iter::from_fn(|| pool.get()).collect();
    let mut expected = released.to_vec();
    expected.reverse();

    assert_eq!(taken, expected);
}

#[test]
fn pool_round_trip_returns_identical_item() {
    let mut pool = Pool::new();
    let item = Rc::new(Point { x: 1, y: 1 });

    pool.release(Rc::clone(&item));

    assert!(Rc::ptr_eq(&pool.get().unwrap(), &item));
}

#[test]
fn generator_contains_requested_count() {
    let generator = point_generator(10);

    assert_eq!(generator.count(), 10);
    assert_eq!(generator.mode(), CreationMode::Constructor);
}

#[test]
fn point_lifecycle() {
    let mut generator = point_generator(10);

    let point = generator.get_with((1, 2)).unwrap();
    assert_eq!(point, Point { x: 1, y: 2 });
    assert_eq!(generator.count(), 9);

    generator.release(point);
    assert_eq!(generator.count(), 10);

    // The released point was reset and is handed out first. Init overwrites it again.
    let point = generator.get_with((7, 8)).unwrap();
    assert_eq!(point, Point { x: 7, y: 8 });
}

#[test]
fn released_point_is_reset_before_reuse() {
    let observed = Rc::new(Cell::new(None));
    let observed_clone = Rc::clone(&observed);

    let mut generator = generate(
        Template::constructor(Point::default),
        Options::new()
            .count(1)
            .init(move |point: &mut Point, ()| observed_clone.set(Some(point.clone())))
            .clear(|point| *point = Point::default()),
    );

    let mut point = generator.get().unwrap();
    point.x = 10;
    point.y = 20;
    generator.release(point);

    let _point = generator.get().unwrap();
    assert_eq!(observed.take(), Some(Point::default()));
}

#[test]
fn lazy_generator_with_fixed_regenerate() {
    let mut generator = generate(Template::value(Point::default()), Options::new().regenerate(5));
    assert_eq!(generator.count(), 0);

    let point = generator.get();

    assert_eq!(point, Some(Point::default()));
    assert_eq!(generator.count(), 4);
}

#[test]
fn lazy_generator_with_dynamic_regenerate() {
    let mut generator = generate(
        Template::value(Point::default()),
        Options::new().regenerate_with(|| 3),
    );

    assert!(generator.get().is_some());
    assert_eq!(generator.count(), 2);
    assert!(matches!(
        generator.options().regenerate_policy(),
        Some(Regenerate::Dynamic(_))
    ));
}

#[test]
fn seed_data_is_consumed() {
    let generator = generate(Template::value(0_i32), Options::new().data(vec![1, 2, 3]));

    assert_eq!(generator.count(), 3);
    assert!(generator.options().seed_data().is_none());

    let generator = generate(
        Template::value(0_i32),
        Options::new().data(vec![1, 2, 3]).count(5),
    );

    assert_eq!(generator.count(), 5);
    assert!(generator.options().seed_data().is_none());
}

#[test]
fn clone_mode_items_are_independent() {
    let mut generator = Generator::builder(Template::value(Point { x: 1, y: 1 }))
        .count(3)
        .build();

    let mut items: Vec<_> = std::iter::from_fn(|| generator.get()).collect();
    assert_eq!(items.len(), 3);

    items[0].x = 99;

    assert_eq!(items[1], Point { x: 1, y: 1 });
    assert_eq!(items[2], Point { x: 1, y: 1 });
    assert_eq!(generator.template(), Some(&Point { x: 1, y: 1 }));
}

#[test]
fn prototype_mode_for_non_clone_types() {
    struct Handle {
        id: u32,
    }

    let mut generator = Generator::builder(Template::prototype(Handle { id: 5 }, |handle| {
        Handle { id: handle.id }
    }))
    .count(2)
    .build();

    assert!(generator.is_clone());
    assert_eq!(generator.get().map(|handle| handle.id), Some(5));
}

#[test]
fn create_grows_by_exact_amount() {
    let mut generator = point_generator(0);

    generator.create(4);
    assert_eq!(generator.count(), 4);

    let _point = generator.get_with((0, 0));
    generator.create(4);
    assert_eq!(generator.count(), 7);
}

#[test]
fn delete_clamps_and_handles_fractions() {
    let mut generator = point_generator(10);

    generator.delete(0.2);
    assert_eq!(generator.count(), 8);

    generator.delete(DeleteAmount::Fraction(Fraction::new(0.5).unwrap()));
    assert_eq!(generator.count(), 4);

    generator.offload(20_usize);
    assert_eq!(generator.count(), 0);
}

#[test]
fn shared_array_generator_returns_empty_vectors() {
    let mut numbers = arrays::get::<i8>();
    numbers.extend([1, 2, 3]);
    arrays::release(numbers);

    assert_eq!(arrays::count::<i8>(), 1);

    let numbers = arrays::get::<i8>();
    assert!(numbers.is_empty());
    assert!(numbers.capacity() >= 3);
}
