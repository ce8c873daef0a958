use std::rc::Rc;

use tempfile::TempDir;
use vectorpad::{demo, editor_options, Editor, EditorConfig, PixmapProvider, Rgba};

#[test]
fn test_config_file_drives_rendered_size() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        "[viewport]\nwidth = 200\nheight = 100\n",
    )
    .unwrap();

    let config = EditorConfig::load_from_file(&config_path).unwrap();
    let mut editor = Editor::new(editor_options(&config), Rc::new(PixmapProvider)).unwrap();
    demo::sketch(&mut editor).unwrap();

    let out = dir.path().join("scene.png");
    editor.composite().save(&out).unwrap();

    let rendered = image::open(&out).unwrap().to_rgba8();
    assert_eq!(rendered.dimensions(), (200, 100));
    assert!(rendered.pixels().any(|p| p.0[3] > 0));
}

#[test]
fn test_committed_scene_has_no_selection_colour() {
    let mut config = EditorConfig::default();
    config.viewport.width = 200;
    config.viewport.height = 100;
    let mut editor = Editor::new(editor_options(&config), Rc::new(PixmapProvider)).unwrap();
    demo::sketch(&mut editor).unwrap();

    let red = Rgba::RED;
    let composite = editor.composite();
    assert!(!composite
        .pixels()
        .any(|p| p.0 == [red.r, red.g, red.b, red.a]));
}
