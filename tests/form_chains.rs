//! End-to-end form validation scenarios
//!
//! Each test validates a small form the way an HTTP handler would: one
//! validator per field, reports merged at the end.

use fieldcheck::prelude::*;
use fieldcheck::semigroup::combine_all;
use fieldcheck::testing::MemoryFs;
use fieldcheck::{assert_errors, assert_valid};

struct SignupForm {
    username: String,
    bio: String,
    interests: Vec<String>,
}

fn validate_signup(form: SignupForm) -> Result<(String, String, Vec<String>), ErrorReport> {
    let username = Validator::text(form.username)
        .trim()
        .not_empty()
        .min_length(3)
        .and_then(|v| v.max_length(16))
        .expect("static bounds");
    let bio = Validator::text(form.bio)
        .trim()
        .spacify()
        .max_length(40)
        .expect("static bounds")
        .htmlify();
    let interests = Validator::list(form.interests)
        .trim()
        .not_empty()
        .max_length(12)
        .expect("static bounds");

    let report = combine_all([
        username.report().clone(),
        bio.report().clone(),
        interests.report().clone(),
    ])
    .unwrap_or_default();

    if report.is_empty() {
        Ok((
            username.to_text(),
            bio.to_text(),
            interests.unwrap_list().expect("list validator"),
        ))
    } else {
        Err(report)
    }
}

#[test]
fn valid_signup_is_sanitized() {
    let form = SignupForm {
        username: "  ada  ".into(),
        bio: "Likes   <engines> & tea".into(),
        interests: vec![" math ".into(), "".into(), "poetry".into()],
    };

    let (username, bio, interests) = validate_signup(form).unwrap();
    assert_eq!(username, "ada");
    assert_eq!(bio, "Likes &lt;engines&gt; &amp; tea");
    assert_eq!(interests, vec!["math", "poetry"]);
}

#[test]
fn invalid_signup_reports_every_field_in_order() {
    let form = SignupForm {
        username: "  ".into(),
        bio: "x".repeat(41),
        interests: vec!["  ".into()],
    };

    let report = validate_signup(form).unwrap_err();
    assert_eq!(
        report.to_string(),
        "cannot be empty, min length: 3, max length: 40, need at least one entry"
    );
}

#[test]
fn upload_paths_are_checked_per_entry() {
    let fs = MemoryFs::new()
        .with_file("/srv/uploads/a.jpg")
        .with_file("/srv/uploads/c.jpg");

    let v = Validator::list(["/a/", "b", "/c"])
        .trim_slashes()
        .is_file_in(&fs, "/srv/uploads/", ".jpg");

    assert_errors!(v, ["not a file: b.jpg"]);
}

#[test]
fn directory_field_on_host() {
    let root = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(root.path().join("themes/dark")).unwrap();
    let prefix = format!("{}/themes/", root.path().display());

    assert_valid!(Validator::text("/dark/").trim_slashes().is_dir(&prefix, ""));

    let v = Validator::text("light").is_dir(&prefix, "/");
    assert_eq!(v.errors(), "not a directory: light/");
}

#[test]
fn misuse_fails_the_call() {
    let err = Validator::text("abc").min_length(-3).unwrap_err();
    assert!(err.to_string().starts_with("invalid argument min_length = -3"));

    let err = Validator::text("abc").unwrap_list().unwrap_err();
    assert_eq!(
        err.to_string(),
        "unwrap_list requires a text list validator, found text"
    );
}

#[test]
fn misuse_errors_work_with_question_mark() {
    fn clean(input: &str) -> Result<String, Box<dyn std::error::Error>> {
        let v = Validator::text(input).trim().max_length(5)?;
        Ok(v.into_result()?.to_string())
    }

    assert_eq!(clean(" hi ").unwrap(), "hi");
    assert_eq!(clean("too long").unwrap_err().to_string(), "max length: 5");
}
