use guard_rail::traits::Nullable;
use std::rc::Rc;
use std::sync::Arc;

#[test]
fn option_is_null_when_none() {
    assert!(None::<u8>.is_null());
    assert!(Some(0u8).is_non_null());
}

#[test]
fn raw_pointers_follow_address() {
    let value = 5;
    assert!(std::ptr::null::<i32>().is_null());
    assert!(std::ptr::null_mut::<i32>().is_null());
    assert!((&value as *const i32).is_non_null());
}

#[test]
fn wrappers_delegate_to_inner_value() {
    let missing: Option<String> = None;
    assert!((&missing).is_null());
    assert!(Box::new(missing.clone()).is_null());
    assert!(Rc::new(missing.clone()).is_null());
    assert!(Arc::new(Some("x")).is_non_null());

    let mut present = Some(1);
    assert!((&mut present).is_non_null());
}

/// A domain type with its own notion of "unset".
struct Handle(u32);

impl Nullable for Handle {
    fn is_null(&self) -> bool {
        self.0 == 0
    }
}

#[test]
fn custom_types_plug_into_null_checks() {
    use guard_rail::condition::HardCondition;

    assert!(Handle(0).is_null());
    assert!(HardCondition::of(Handle(3)).is_non_null("handle is unset").is_approved());
    assert!(!HardCondition::of(Handle(0)).is_non_null("handle is unset").is_approved());
}
