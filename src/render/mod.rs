use crate::layout::GridLayout;
use crate::model::IconSet;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// Renders the composite document. Every icon is wrapped in a group translated
/// to its grid cell; the content itself is inserted untouched.
///
/// The returned text still carries the leading newline of the template; the
/// writer trims it.
pub fn render_document(icons: &IconSet, layout: &GridLayout) -> String {
    let groups: String = icons
        .iter()
        .enumerate()
        .map(|(index, icon)| {
            let (x, y) = layout.cell_offset(index);
            format!(
                "\n  <g transform=\"translate({x}, {y})\">\n    {}\n  </g>",
                icon.content
            )
        })
        .collect();

    format!(
        "\n<svg width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\" fill=\"none\" xmlns=\"{SVG_NS}\" xmlns:xlink=\"{XLINK_NS}\" version=\"1.1\">\n  {groups}\n</svg>",
        layout.width, layout.height, layout.raw_width, layout.raw_height
    )
}
