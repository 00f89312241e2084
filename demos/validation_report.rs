//! Accumulating validation with a merged report.
//!
//! Run with: cargo run --example validation_report

use guard_rail::condition::{HardCondition, SoftCondition};
use guard_rail::tracker::{ErrorTracker, ReportFormatConfig};
use guard_rail::ResultState;

#[derive(Debug)]
struct Address {
    street: String,
    zip: String,
}

#[derive(Debug)]
struct Signup {
    username: String,
    email: String,
    age: u32,
    address: Address,
}

fn check_address(address: &Address) -> SoftCondition<&Address> {
    SoftCondition::of(address)
        .is_not(|a| a.street.trim().is_empty(), "street is empty")
        .and_is(|a| a.zip.len() == 5, "zip must have 5 digits")
        .and_is(|a| a.zip.chars().all(|c| c.is_ascii_digit()), "zip must be numeric")
}

fn check_signup(signup: &Signup, tracker: &ErrorTracker) -> ResultState<()> {
    SoftCondition::of(signup)
        .is(|s| s.username.len() >= 5, "username must have at least 5 characters")
        .and_is(|s| s.username.chars().all(|c| c.is_ascii_alphanumeric()), "username must be alphanumeric")
        .and_is(|s| s.email.contains('@'), "email is missing @")
        .and_for_other_condition(HardCondition::of(signup.age).is(|age| *age >= 18, "user must be an adult"))
        .and_for_other_soft_condition(check_address(&signup.address))
        .generate_result_error_if_exists_with(tracker)
        .tracked("check_signup")
}

fn main() {
    let signups = [
        Signup {
            username: "ada_l".to_string(),
            email: "ada.example.com".to_string(),
            age: 16,
            address: Address { street: " ".to_string(), zip: "12a4".to_string() },
        },
        Signup {
            username: "grace".to_string(),
            email: "grace@example.com".to_string(),
            age: 37,
            address: Address { street: "Main St 1".to_string(), zip: "10001".to_string() },
        },
    ];

    for tracker in [ErrorTracker::default(), ErrorTracker::new(ReportFormatConfig::bulleted())] {
        for signup in &signups {
            match check_signup(signup, &tracker) {
                ResultState::Success(()) => println!("{} accepted", signup.username),
                ResultState::Failure(failure) => println!("{} rejected:\n{failure}\n", signup.username),
                ResultState::Empty => println!("{} skipped", signup.username),
            }
        }
    }
}
