//! End-to-end recommendation scenarios over fixture wardrobes.

use std::collections::BTreeSet;

use stylist_engine::{
    pair_harmony, recommend, Category, ColorFamily, EngineConfig, ItemStyle, Occasion,
    RecommendOptions, RecommendationEngine, Season,
};
use stylist_test_utils::{fixture_now, mixed_wardrobe, work_wardrobe, ItemBuilder};

#[test]
fn given_work_wardrobe_when_recommending_for_work_then_single_classic_outfit() {
    let wardrobe = work_wardrobe();

    let recs = recommend(&wardrobe, Occasion::Work, &RecommendOptions::default());

    assert_eq!(recs.len(), 1);
    let rec = &recs[0];
    assert_eq!(
        rec.item_ids(),
        vec!["white-shirt", "navy-trousers", "black-sneakers"]
    );
    assert!((rec.style_score - 0.9).abs() < 1e-9);

    let harmony = (pair_harmony(ColorFamily::White, ColorFamily::Navy)
        + pair_harmony(ColorFamily::White, ColorFamily::Black)
        + pair_harmony(ColorFamily::Navy, ColorFamily::Black))
        / 3.0;
    assert!((rec.color_harmony - harmony).abs() < 1e-9);
    assert!(rec.reasoning.starts_with("Perfect work styling"));
    assert!(rec.reasoning.ends_with('.'));
}

#[test]
fn given_empty_wardrobe_when_recommending_then_empty_list() {
    let recs = recommend(&[], Occasion::Work, &RecommendOptions::default());
    assert!(recs.is_empty());
}

#[test]
fn given_mixed_wardrobe_when_recommending_twice_then_output_is_identical() {
    let wardrobe = mixed_wardrobe();
    let options = RecommendOptions::new()
        .with_preferred_colors(vec![ColorFamily::Black])
        .with_max_recommendations(20);

    let first = recommend(&wardrobe, Occasion::Date, &options);
    let second = recommend(&wardrobe, Occasion::Date, &options);

    assert!(!first.is_empty());
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn given_mixed_wardrobe_when_filtering_by_winter_then_only_winter_items_used() {
    let wardrobe = mixed_wardrobe();
    let options = RecommendOptions::new()
        .with_season(Season::Winter)
        .with_max_recommendations(50);

    let recs = recommend(&wardrobe, Occasion::Casual, &options);

    assert!(!recs.is_empty());
    for rec in &recs {
        for item in &rec.items {
            assert!(item.fits_season(Season::Winter), "{} is not for winter", item.id);
        }
    }
    // the summer dress cannot appear, so no dress outfits at all
    assert!(recs.iter().all(|r| r.skeleton.as_deref() != Some("dress")));
}

#[test]
fn given_include_and_exclude_when_recommending_then_both_are_honoured() {
    let wardrobe = mixed_wardrobe();
    let options = RecommendOptions::new()
        .including(["skirt-black"])
        .excluding(["heels-black"])
        .with_max_recommendations(50);

    let recs = recommend(&wardrobe, Occasion::Party, &options);

    assert!(!recs.is_empty());
    for rec in &recs {
        let ids = rec.item_ids();
        assert!(ids.contains(&"skirt-black"));
        assert!(!ids.contains(&"heels-black"));
    }
}

#[test]
fn given_preferred_color_when_scoring_then_matching_outfits_get_bonus() {
    let wardrobe = mixed_wardrobe();
    let options = RecommendOptions::new()
        .with_preferred_colors(vec![ColorFamily::Red])
        .with_max_recommendations(50);

    let recs = recommend(&wardrobe, Occasion::Date, &options);

    for rec in &recs {
        let wears_red = rec.items.iter().any(|i| i.has_color(ColorFamily::Red));
        let expected = if wears_red { 0.1 } else { 0.0 };
        assert_eq!(rec.breakdown.color_preference_bonus, expected);
    }
}

#[test]
fn given_seven_tops_when_recommending_then_only_first_five_participate() {
    let mut wardrobe: Vec<_> = (1..=7)
        .map(|n| ItemBuilder::new(&format!("top-{n}"), Category::Tops).build())
        .collect();
    wardrobe.push(ItemBuilder::new("pants", Category::Bottoms).build());
    wardrobe.push(ItemBuilder::new("shoes", Category::Shoes).build());

    let recs = recommend(&wardrobe, Occasion::Casual, &RecommendOptions::default());

    let tops: BTreeSet<String> = recs.iter().map(|r| r.items[0].id.clone()).collect();
    let expected: BTreeSet<String> = (1..=5).map(|n| format!("top-{n}")).collect();
    assert_eq!(tops, expected);
}

#[test]
fn given_seven_tops_when_quick_suggesting_then_priority_order_decides_participants() {
    let mut wardrobe: Vec<_> = (1..=5)
        .map(|n| {
            ItemBuilder::new(&format!("top-{n}"), Category::Tops)
                .worn(8)
                .build()
        })
        .collect();
    wardrobe.push(
        ItemBuilder::new("top-new", Category::Tops)
            .worn(8)
            .added_days_ago(1)
            .build(),
    );
    wardrobe.push(
        ItemBuilder::new("top-fav", Category::Tops)
            .worn(8)
            .favorite()
            .build(),
    );
    wardrobe.push(ItemBuilder::new("pants", Category::Bottoms).build());
    wardrobe.push(ItemBuilder::new("shoes", Category::Shoes).build());

    let engine = RecommendationEngine::default();
    let recs = engine.quick_suggestions_at(&wardrobe, Occasion::Casual, 10, fixture_now());

    let tops: Vec<&str> = recs.iter().map(|r| r.items[0].id.as_str()).collect();
    assert!(tops.contains(&"top-new"));
    assert!(tops.contains(&"top-fav"));
    assert!(!tops.contains(&"top-4"));
    assert!(!tops.contains(&"top-5"));
}

#[test]
fn given_small_caps_when_recommending_then_work_is_bounded() {
    let wardrobe = mixed_wardrobe();
    let engine = RecommendationEngine::new(
        EngineConfig::default()
            .with_max_items_per_category(1)
            .with_max_combinations_per_skeleton(1),
    );

    let recs = engine.recommend(&wardrobe, Occasion::Casual, &RecommendOptions::default());

    // one combination per satisfiable skeleton
    assert_eq!(recs.len(), 3);
    let used: BTreeSet<&str> = recs.iter().flat_map(|r| r.item_ids()).collect();
    assert!(used.contains("tee-white"));
    assert!(!used.contains("blouse-pink"));
}

#[test]
fn given_elegant_dress_when_recommending_for_formal_then_dress_outfit_ranks_first() {
    let wardrobe = vec![
        ItemBuilder::new("gown", Category::Dresses)
            .color(ColorFamily::Black)
            .style(ItemStyle::Elegant)
            .build(),
        ItemBuilder::new("heels", Category::Shoes)
            .color(ColorFamily::Black)
            .style(ItemStyle::Elegant)
            .build(),
        ItemBuilder::new("hoodie", Category::Tops)
            .color(ColorFamily::Orange)
            .style(ItemStyle::Sporty)
            .build(),
        ItemBuilder::new("joggers", Category::Bottoms)
            .color(ColorFamily::Red)
            .style(ItemStyle::Sporty)
            .build(),
    ];

    let recs = recommend(&wardrobe, Occasion::Formal, &RecommendOptions::default());

    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].skeleton.as_deref(), Some("dress"));
    assert_eq!(recs[0].confidence.value(), 1.0);
    assert!(recs[1].confidence.value() < recs[0].confidence.value());
}
