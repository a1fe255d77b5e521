// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use salx::models::{SalaryFrequency, UserProfile};
use salx::profile::{ProfileEdit, bio_word_count, is_dirty, parse_salary, save_profile, truncate_bio};

#[test]
fn bio_within_limit_is_untouched() {
    let bio = "Saving up\nfor a trip.";
    assert_eq!(truncate_bio(bio), bio);
    assert_eq!(bio_word_count(bio), 5);
}

#[test]
fn long_bio_is_cut_to_hundred_words() {
    let words: Vec<String> = (0..150).map(|i| format!("word{i}")).collect();
    let cut = truncate_bio(&words.join("  "));
    assert_eq!(bio_word_count(&cut), 100);
    assert!(cut.ends_with("word99"));
}

#[test]
fn save_only_touches_bio() {
    let draft = UserProfile {
        name: "Ben".into(),
        bio: "x ".repeat(120),
        nature_of_work: "Freelancer".into(),
        salary: Decimal::new(25000, 0),
        salary_frequency: SalaryFrequency::Weekly,
        profile_picture_url: Some("data:image/png;base64,AAA".into()),
        cover_photo_url: None,
    };
    let saved = save_profile(&draft);
    assert_eq!(bio_word_count(&saved.bio), 100);
    assert_eq!(saved.name, draft.name);
    assert_eq!(saved.nature_of_work, draft.nature_of_work);
    assert_eq!(saved.salary, draft.salary);
    assert_eq!(saved.salary_frequency, SalaryFrequency::Weekly);
    assert_eq!(saved.profile_picture_url, draft.profile_picture_url);
}

#[test]
fn dirty_tracks_any_field_including_images() {
    let persisted = UserProfile::default();
    let untouched = ProfileEdit::default().draft_from(&persisted);
    assert!(!is_dirty(&untouched, &persisted));

    let with_cover = ProfileEdit {
        cover_photo_url: Some(Some("cover.png".into())),
        ..ProfileEdit::default()
    }
    .draft_from(&persisted);
    assert!(is_dirty(&with_cover, &persisted));

    // Setting a field to its current value is not a change
    let same_name = ProfileEdit {
        name: Some(persisted.name.clone()),
        ..ProfileEdit::default()
    }
    .draft_from(&persisted);
    assert!(!is_dirty(&same_name, &persisted));
}

#[test]
fn clearing_an_image_reference() {
    let persisted = UserProfile {
        profile_picture_url: Some("me.jpg".into()),
        ..UserProfile::default()
    };
    let draft = ProfileEdit {
        profile_picture_url: Some(None),
        ..ProfileEdit::default()
    }
    .draft_from(&persisted);
    assert_eq!(draft.profile_picture_url, None);
}

#[test]
fn salary_must_be_non_negative() {
    assert_eq!(parse_salary("0").unwrap(), Decimal::ZERO);
    assert_eq!(parse_salary("30000.50").unwrap(), Decimal::new(3000050, 2));
    assert!(parse_salary("-1").is_err());
    assert!(parse_salary("lots").is_err());
}

#[test]
fn profile_json_uses_camel_case_keys() {
    let v = serde_json::to_value(UserProfile::default()).unwrap();
    assert_eq!(v["natureOfWork"], "");
    assert_eq!(v["salaryFrequency"], "monthly");
    assert!(v["profilePictureUrl"].is_null());
    assert!(v["coverPhotoUrl"].is_null());
}
