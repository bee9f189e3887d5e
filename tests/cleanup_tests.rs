//! Temp-resource discipline: no render leaves files behind, whatever its
//! exit path. All scenarios run inside one test so concurrent arenas from
//! sibling tests cannot disturb the temp-directory snapshots.

use std::collections::BTreeSet;
use std::env;
use std::fs;
use tagpress::{generate, GenerationRequest, LabelKind, Status};

fn engine_temp_files() -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    if let Ok(entries) = fs::read_dir(env::temp_dir()) {
        for entry in entries.flatten() {
            let name = entry.file_name().to_string_lossy().to_string();
            if name.starts_with("tagpress") {
                names.insert(name);
            }
        }
    }
    names
}

#[test]
fn no_temp_files_survive_any_exit_path() {
    let before = engine_temp_files();

    // Success path: roll synthesizes a QR raster.
    let success = generate(
        LabelKind::Roll,
        &GenerationRequest {
            variant_identifier: Some("v1".to_string()),
            variant_price: Some(1.0),
            qr_payload: Some("cleanup".to_string()),
            stock_quantity: 3,
            ..GenerationRequest::default()
        },
    );
    assert!(success.is_success());

    // Validation failure: rejected before any allocation.
    let rejected = generate(LabelKind::SingleLabel, &GenerationRequest::default());
    assert_eq!(rejected.status, Status::Unprocessable);

    // Render failure: the payload overflows every QR version after the
    // arena already exists.
    let failed = generate(
        LabelKind::Qr,
        &GenerationRequest {
            variant_identifier: Some("v1".to_string()),
            qr_payload: Some("a".repeat(4000)),
            ..GenerationRequest::default()
        },
    );
    assert_eq!(failed.status, Status::Internal);

    // Malformed image bytes: the failure happens mid-render, after the
    // temp file was written.
    let bad_image = generate(
        LabelKind::SingleLabel,
        &GenerationRequest {
            variant_identifier: Some("v1".to_string()),
            image_data: Some(b"definitely not a png".to_vec()),
            ..GenerationRequest::default()
        },
    );
    assert_eq!(bad_image.status, Status::Internal);

    let after = engine_temp_files();
    let leaked: Vec<_> = after.difference(&before).collect();
    assert!(leaked.is_empty(), "leaked temp files: {leaked:?}");
}
