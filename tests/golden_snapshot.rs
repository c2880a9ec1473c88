//! Golden snapshot test: compares the sha256 digest of the rendered text
//! snapshot at a few widths against stored goldens.

use std::fs;
use std::path::PathBuf;

use synapse_landing::{render_page, snapshot, PageContent};

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens");
    p.push(name);
    p
}

#[test]
fn golden_snapshot_digests_match() {
    let content = PageContent::default();

    for (name, width) in [
        ("narrow_500.digest", 500.0),
        ("medium_1024.digest", 1024.0),
        ("wide_1440.digest", 1440.0),
    ] {
        let page = render_page(width, &content).expect("render failed");
        let digest = snapshot::digest(&page);

        let expected_path = golden_path(name);
        if std::env::var("UPDATE_GOLDENS").is_ok() {
            fs::create_dir_all("tests/goldens").ok();
            fs::write(&expected_path, &digest).expect("write golden");
            println!("Updated golden: {:?}", expected_path);
            continue;
        }

        if !expected_path.exists() {
            println!(
                "No golden at {:?}; run with UPDATE_GOLDENS=1 to create it. Skipping.",
                expected_path
            );
            continue;
        }

        let expected = fs::read_to_string(&expected_path).expect("unable to read golden");
        assert_eq!(digest, expected.trim(), "digest mismatch for {}", name);
    }
}

#[test]
fn snapshot_text_is_stable_between_renders() {
    let content = PageContent::default();
    let a = snapshot::text_snapshot(&render_page(1024.0, &content).unwrap());
    let b = snapshot::text_snapshot(&render_page(1024.0, &content).unwrap());
    assert_eq!(a.text, b.text);
    assert_eq!(a.title, "S1napse");
}
