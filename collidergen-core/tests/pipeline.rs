use collidergen_core::io::{load_grid, MapOptions};
use collidergen_core::render::{render_colliders, RenderOptions};
use collidergen_core::{decompose, ColliderSet, Rect};
use std::collections::HashSet;
use std::io::Write;
use tempfile::Builder;

fn write_map(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut f = Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp map");
    f.write_all(contents.as_bytes()).unwrap();
    f
}

#[test]
fn tiled_map_to_colliders() {
    // 4x3 terrain: a full top row, a 2-wide left column block, and an
    // isolated cell bottom-right.
    let map = write_map(
        ".json",
        r#"{
            "layers": [
                { "name": "Terrain", "width": 4, "height": 3,
                  "data": [7, 7, 7, 7,
                           7, 7, 0, 0,
                           7, 7, 0, 9] }
            ]
        }"#,
    );

    let grid = load_grid(map.path(), &MapOptions::default()).expect("load map");
    assert_eq!((grid.width(), grid.height()), (4, 3));
    assert_eq!(grid.solid_count(), 9);

    let rects = decompose(grid.clone());
    assert_eq!(
        rects,
        vec![
            Rect::new(0, 0, 4, 1),
            Rect::new(0, 1, 2, 2),
            Rect::new(3, 2, 1, 1),
        ]
    );

    // Partition invariants against the source grid.
    let mut covered: HashSet<(u32, u32)> = HashSet::new();
    for rect in &rects {
        for cell in rect.cells() {
            assert!(grid.is_solid(cell.0, cell.1));
            assert!(covered.insert(cell));
        }
    }
    assert_eq!(covered.len(), grid.solid_count());

    // Serialized collider set round-trips through JSON.
    let set = ColliderSet::new(grid.width(), grid.height(), 32, rects.clone());
    let json = serde_json::to_string(&set).unwrap();
    let back: ColliderSet = serde_json::from_str(&json).unwrap();
    assert_eq!(set, back);

    // Preview render covers exactly the collider pixels.
    let options = RenderOptions {
        tile_size: 2,
        ..RenderOptions::default()
    };
    let image = render_colliders(&rects, grid.width(), grid.height(), &options).unwrap();
    assert_eq!((image.width(), image.height()), (8, 6));
    let background = image::Rgba(options.background);
    assert_ne!(*image.get_pixel(0, 0), background); // inside top row
    assert_eq!(*image.get_pixel(5, 3), background); // empty middle cell
}

#[test]
fn ascii_map_to_colliders() {
    let map = write_map(
        ".txt",
        "; L-shaped room\n\
         #.\n\
         ##\n",
    );

    let grid = load_grid(map.path(), &MapOptions::default()).expect("load map");
    let rects = decompose(grid);
    assert_eq!(rects, vec![Rect::new(0, 0, 1, 2), Rect::new(1, 1, 1, 1)]);
}

#[test]
fn malformed_tiled_map_is_rejected() {
    let map = write_map(
        ".json",
        r#"{ "layers": [ { "name": "terrain", "width": 2, "height": 2, "data": [1, 1, 1] } ] }"#,
    );
    assert!(load_grid(map.path(), &MapOptions::default()).is_err());
}

#[test]
fn missing_layer_is_rejected() {
    let map = write_map(
        ".json",
        r#"{ "layers": [ { "name": "decor", "width": 1, "height": 1, "data": [1] } ] }"#,
    );
    assert!(load_grid(map.path(), &MapOptions::default()).is_err());
}
