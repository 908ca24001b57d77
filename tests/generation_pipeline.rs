use pretty_assertions::assert_eq;

use advertorial::application::generator::{Angle, Archetype, ProductInput, generate};
use advertorial::application::render::{RenderOptions, render_page};
use advertorial::domain::block::Block;
use advertorial::domain::catalog::DEFAULT_DISCLAIMER;
use advertorial::domain::id::BlockIdGenerator;
use advertorial::domain::sequence::{duplicate_block, move_block, remove_block};

fn product() -> ProductInput {
    ProductInput {
        title: "Glow Serum".into(),
        description: "A brightening serum with vitamin C.".into(),
    }
}

fn options() -> RenderOptions {
    RenderOptions::new("#0a7d44", "Glow Serum", "glow-serum")
}

#[test]
fn every_generated_page_renders_with_chrome_and_disclaimer() {
    let ids = BlockIdGenerator::new();
    for archetype in Archetype::ALL {
        for angle in Angle::ALL {
            let page = generate(&product(), archetype, angle, &ids);
            let html = render_page(&page, &options());

            assert_eq!(
                html.matches("<style>").count(),
                1,
                "{archetype:?}/{angle:?}"
            );
            assert!(html.contains(DEFAULT_DISCLAIMER), "{archetype:?}/{angle:?}");
            assert!(html.contains("Glow Serum"), "{archetype:?}/{angle:?}");
        }
    }
}

#[test]
fn full_pages_link_every_cta_to_the_product() {
    let ids = BlockIdGenerator::new();
    let page = generate(&product(), Archetype::Narrative, Angle::Pain, &ids);
    let html = render_page(&page, &options());

    let cta_count = page.iter().filter(|b| b.type_tag() == "cta").count();
    assert!(cta_count >= 1);
    assert!(html.matches("href=\"/products/glow-serum\"").count() >= cta_count);
}

#[test]
fn generated_pages_survive_a_json_round_trip() {
    let ids = BlockIdGenerator::new();
    for archetype in Archetype::ALL {
        let page = generate(&product(), archetype, Angle::Comparison, &ids);
        let raw = serde_json::to_string(&page).expect("serialize");
        let restored: Vec<Block> = serde_json::from_str(&raw).expect("deserialize");
        assert_eq!(page, restored, "{archetype:?}");
    }
}

#[test]
fn editing_operations_compose_on_a_generated_page() {
    let ids = BlockIdGenerator::new();
    let mut page = generate(&product(), Archetype::Listicle, Angle::Aspiration, &ids);
    let original_len = page.len();

    duplicate_block(&mut page, 1, &ids).expect("duplicate");
    assert_eq!(page.len(), original_len + 1);
    assert_eq!(page[1].type_tag(), page[2].type_tag());
    assert_ne!(page[1].id, page[2].id);

    move_block(&mut page, 2, 0).expect("move");
    let duplicated_id = page[0].id.clone();

    remove_block(&mut page, 0).expect("remove");
    assert_eq!(page.len(), original_len);
    assert!(page.iter().all(|b| b.id != duplicated_id));

    // The edited page still renders without error.
    let html = render_page(&page, &options());
    assert!(html.contains("advertorial"));
}

#[test]
fn distinct_generators_never_collide_on_ids() {
    let a = BlockIdGenerator::new();
    let b = BlockIdGenerator::new();
    let page_a = generate(&product(), Archetype::Report, Angle::Pain, &a);
    let page_b = generate(&product(), Archetype::Report, Angle::Pain, &b);

    // Same counter sequence but ids also carry a time component, so pages
    // stay individually collision free.
    let unique: std::collections::HashSet<&str> =
        page_a.iter().chain(&page_b).map(|b| b.id.as_str()).collect();
    assert!(unique.len() >= page_a.len());
}
