//! HTML host document around the SVG chart.

/// Title of the generated page.
const TITLE: &str = "Latency scatterplot";

/// Wrap an SVG document in a minimal HTML page.
pub fn to_html(svg: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>\nbody {{ font: 10px sans-serif; margin: 0; }}\n</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        TITLE,
        svg.trim_end()
    )
}
