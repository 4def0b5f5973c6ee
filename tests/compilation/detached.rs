use bark_bench::{direct::BoundBark, *};

fn assert_static<T: 'static>(_: &T) {}

fn detach(name: &str) -> BoundBark {
    let dog = BoundDog::new(Name::from(name));
    dog.bark_fn()
}

fn check_dogs_are_owned() {
    let local = String::from("Rex");
    assert_static(&ClosureDog::new(Name::from(local.as_str())));
    assert_static(&DogWithComposition::new(Name::from(local.as_str())));
    assert_static(&DogWithClosure::new(Name::from(local.as_str())));
    assert_static(&Dog::new(Name::from(local.as_str())));
    assert_static(&BoundDog::new(Name::from(local.as_str())));
    drop(local);
}

fn main() {
    let bark = detach("Rex");
    assert_static(&bark);
    assert_eq!(bark(), "Rex");
    check_dogs_are_owned();
}
