use include_dir::{Dir, include_dir};
use iced::widget::{Svg, svg};
use tracing::warn;

static ICONS: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/assets/icons");

/// Load a bundled SVG icon by file stem, e.g. `icon("trash")`.
pub fn icon<'a>(name: &str) -> Svg<'a> {
    let bytes: &'static [u8] = match ICONS.get_file(format!("{name}.svg")) {
        Some(file) => file.contents(),
        None => {
            warn!("Missing icon {name}");
            &[]
        }
    };

    svg(svg::Handle::from_memory(bytes)).width(16).height(16)
}
