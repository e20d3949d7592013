use mcbackport_pipeline::{BackportOptions, Backporter, RunSummary};
use mcbackport_testkit::{
    TempPack, ENCHANTED_BOOK_MIXED, ENCHANTED_BOOK_SHARPNESS, PASSTHROUGH_STICK, PLAIN_BOOK,
    TRIDENT_COLLIDING, UNKNOWN_NODE,
};
use serde_json::Value;

const ATTRIBUTION: &str = "Backported by mcbackport";

fn options(source: &TempPack, output: &TempPack) -> BackportOptions {
    BackportOptions {
        input: source.root().to_path_buf(),
        output: output.root().to_path_buf(),
        clear_output: true,
        attribution: ATTRIBUTION.to_string(),
    }
}

fn json(pack: &TempPack, rel: &str) -> Value {
    serde_json::from_str(&pack.read(rel)).unwrap_or_else(|err| panic!("{rel}: {err}"))
}

#[test]
fn enchanted_book_pack_end_to_end() {
    let source = TempPack::new("e2e_src");
    let output = TempPack::new("e2e_out");
    source.write_metadata("Fancy books");
    source.write_item("enchanted_book", ENCHANTED_BOOK_SHARPNESS);
    source.write_texture("minecraft:item/enchanted_books/sharpness_3");

    let summary = Backporter::new(options(&source, &output)).run().expect("run");
    assert_eq!(
        summary,
        RunSummary {
            converted: 1,
            skipped: 0,
            failed: 0
        }
    );

    assert!(!output.exists("assets/minecraft/items"));
    assert!(output.exists("assets/minecraft/textures/item/enchanted_books/sharpness_3.png"));

    let props = output.read("assets/minecraft/optifine/cit/enchanted_book/sharpness_3.properties");
    assert!(props.lines().any(|l| l == "enchantmentIDs=minecraft:sharpness"));
    assert!(props.lines().any(|l| l == "enchantmentLevels=3"));

    let unit = json(&output, "assets/minecraft/models/item/enchanted_books/sharpness_3.json");
    let overrides = unit["overrides"].as_array().expect("overrides");
    assert_eq!(overrides.len(), 6);
    assert_eq!(overrides[0]["predicate"]["is_ground"], 1);
    assert_eq!(overrides[2]["predicate"]["is_held"], 1);
    assert_eq!(overrides[5]["predicate"]["is_offhand"], 1);

    let base = json(&output, "assets/minecraft/models/item/enchanted_book.json");
    assert!(base.get("overrides").is_none());

    let meta = json(&output, "pack.mcmeta");
    assert_eq!(
        meta["pack"]["description"],
        format!("Fancy books\n{ATTRIBUTION}")
    );
    // The source pack is never modified.
    assert_eq!(json(&source, "pack.mcmeta")["pack"]["description"], "Fancy books");
}

#[test]
fn failing_items_do_not_abort_the_run() {
    let source = TempPack::new("e2e_mixed_src");
    let output = TempPack::new("e2e_mixed_out");
    source.write_metadata("Mixed");
    source.write_item("book", PLAIN_BOOK);
    source.write_item("stick", PASSTHROUGH_STICK);
    source.write_item("compass", UNKNOWN_NODE);
    source.write_item("broken", "{ not json");
    source.write_item("enchanted_book", ENCHANTED_BOOK_MIXED);

    let summary = Backporter::new(options(&source, &output)).run().expect("run");
    assert_eq!(summary.converted, 2);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.failed, 2);

    let book = json(&output, "assets/minecraft/models/item/book.json");
    assert_eq!(book["overrides"].as_array().unwrap().len(), 6);
    assert!(!output.exists("assets/minecraft/models/item/stick.json"));
    assert!(!output.exists("assets/minecraft/models/item/compass.json"));
    // Animated model missing from the source pack is skipped, not fatal.
    assert!(!output.exists("assets/minecraft/models/item/books_3d/channeling_3d.json"));
    assert!(output.exists("assets/minecraft/optifine/cit/enchanted_book/channeling.properties"));
}

#[test]
fn colliding_model_is_preserved_before_overwrite() {
    let source = TempPack::new("e2e_trident_src");
    let output = TempPack::new("e2e_trident_out");
    source.write_metadata("Tridents");
    source.write_item("trident", TRIDENT_COLLIDING);
    source.write_model(
        "minecraft:item/trident",
        r#"{"parent":"minecraft:item/trident_in_hand","textures":{"0":"minecraft:item/trident_3d"}}"#,
    );
    source.write_flat_model("minecraft:item/trident_2d", "minecraft:item/trident");

    let summary = Backporter::new(options(&source, &output)).run().expect("run");
    assert_eq!(summary.converted, 1);

    let preserved = json(&output, "assets/minecraft/models/item/trident_3d.json");
    assert_eq!(preserved["parent"], "minecraft:item/trident_in_hand");
    let generated = json(&output, "assets/minecraft/models/item/trident.json");
    assert_eq!(generated["textures"]["layer0"], "minecraft:item/trident");
    assert_eq!(generated["overrides"][1]["model"], "minecraft:item/trident_3d");
}

#[test]
fn missing_preserved_source_fails_only_that_item() {
    let source = TempPack::new("e2e_nopres_src");
    let output = TempPack::new("e2e_nopres_out");
    source.write_item("trident", TRIDENT_COLLIDING);
    source.write_item("book", PLAIN_BOOK);

    let summary = Backporter::new(options(&source, &output)).run().expect("run");
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.converted, 1);
}

#[test]
fn rerunning_does_not_duplicate_attribution() {
    let source = TempPack::new("e2e_rerun_src");
    let output = TempPack::new("e2e_rerun_out");
    source.write_metadata("Again");
    source.write_item("book", PLAIN_BOOK);

    let mut opts = options(&source, &output);
    Backporter::new(opts.clone()).run().expect("first run");
    opts.clear_output = false;
    Backporter::new(opts).run().expect("second run");

    let description = json(&output, "pack.mcmeta")["pack"]["description"]
        .as_str()
        .unwrap()
        .to_string();
    assert_eq!(description.matches(ATTRIBUTION).count(), 1);
}

#[test]
fn missing_input_is_a_run_error() {
    let output = TempPack::new("e2e_noinput_out");
    let opts = BackportOptions {
        input: output.root().join("does_not_exist"),
        output: output.root().join("out"),
        clear_output: true,
        attribution: ATTRIBUTION.to_string(),
    };
    assert!(Backporter::new(opts).run().is_err());
}
