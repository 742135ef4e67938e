use crate::infographic::Tile;

/// Grid width; tiles are laid out row-major.
pub const GRID_COLUMNS: usize = 3;

const STYLE: &str = "\
body { font-family: system-ui, sans-serif; max-width: 960px; margin: 40px auto; padding: 20px; }
h1 { color: #2c3e50; text-align: center; }
form { display: grid; gap: 12px; max-width: 420px; margin: 0 auto; }
label { font-weight: 600; }
.alert { background: #f8d7da; border-left: 4px solid #dc3545; padding: 12px; border-radius: 4px; }
#grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 8px; }
.grid-item { padding: 12px; text-align: center; color: white; border-radius: 4px; }
.grid-item img { max-width: 100%; height: 120px; object-fit: contain; }
.dino { background: #009687; }
.bird { background: #67a866; }
.human { background: #dc7657; }
";

/// HTML formatter for the form and the tile grid
pub struct HtmlFormatter;

impl HtmlFormatter {
    /// Submission form. `alert` is shown as a banner and a blocking `alert()`.
    pub fn form_page(alert: Option<&str>) -> String {
        let mut html = String::with_capacity(2048);
        push_head(&mut html, "Dinosaurs");

        html.push_str("<h1>Dinosaurs</h1>\n");
        html.push_str("<p style=\"text-align:center\">How do you compare?</p>\n");

        if let Some(message) = alert {
            let escaped = escape_html(message);
            html.push_str(&format!("<div class=\"alert\" role=\"alert\">{}</div>\n", escaped));
            html.push_str(&format!(
                "<script>alert(\"{}\");</script>\n",
                escape_js_string(message)
            ));
        }

        html.push_str("<form id=\"dino-compare\" method=\"post\" action=\"/infographic\">\n");
        html.push_str("<label for=\"name\">Name</label>\n");
        html.push_str("<input id=\"name\" name=\"name\" type=\"text\">\n");
        html.push_str("<label>Height</label>\n");
        html.push_str("<input id=\"feet\" name=\"feet\" type=\"number\" min=\"0\" placeholder=\"Feet\">\n");
        html.push_str("<input id=\"inches\" name=\"inches\" type=\"number\" min=\"0\" placeholder=\"Inches\">\n");
        html.push_str("<label for=\"weight\">Weight (lbs)</label>\n");
        html.push_str("<input id=\"weight\" name=\"weight\" type=\"number\" min=\"0\" step=\"any\">\n");
        html.push_str("<label for=\"diet\">Diet</label>\n");
        html.push_str("<select id=\"diet\" name=\"diet\">\n");
        for diet in ["Herbivore", "Omnivore", "Carnivore"] {
            html.push_str(&format!("<option>{}</option>\n", diet));
        }
        html.push_str("</select>\n");
        html.push_str("<label for=\"location\">Location</label>\n");
        html.push_str("<input id=\"location\" name=\"location\" type=\"text\" placeholder=\"e.g. North America\">\n");
        html.push_str("<button id=\"btn\" type=\"submit\">Compare Me!</button>\n");
        html.push_str("</form>\n");

        html.push_str("</body>\n</html>\n");
        html
    }

    /// Tile grid; replaces the form after a successful submission.
    pub fn grid_page(tiles: &[Tile]) -> String {
        let mut html = String::with_capacity(4096);
        push_head(&mut html, "Dinosaur Infographic");
        html.push_str("<h1>Dinosaurs</h1>\n");
        html.push_str(&Self::grid(tiles));
        html.push_str("<p style=\"text-align:center\"><a href=\"/\">Compare again</a></p>\n");
        html.push_str("</body>\n</html>\n");
        html
    }

    /// Bare grid fragment.
    pub fn grid(tiles: &[Tile]) -> String {
        let mut html = String::with_capacity(2048);
        html.push_str("<main id=\"grid\">\n");
        for tile in tiles {
            html.push_str(&format!(
                "<div class=\"{}\" id=\"tile-{}\" data-slot=\"{}\">\n",
                tile.kind.css_class(),
                tile.roster_index,
                tile.slot
            ));
            html.push_str(&format!("<h3>{}</h3>\n", escape_html(&tile.header)));
            html.push_str(&format!(
                "<img src=\"{}\" alt=\"{}\">\n",
                escape_html(&image_src(&tile.image_path)),
                escape_html(&tile.header)
            ));
            if let Some(fact) = &tile.fact {
                html.push_str(&format!("<p>{}</p>\n", escape_html(fact)));
            }
            html.push_str("</div>\n");
        }
        html.push_str("</main>\n");
        html
    }
}

fn push_head(html: &mut String, title: &str) {
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", title));
    html.push_str("<style>\n");
    html.push_str(STYLE);
    html.push_str("</style>\n</head>\n<body>\n");
}

/// Percent-encode each path segment, so "tyrannosaurus rex.png" becomes
/// "tyrannosaurus%20rex.png". Separators are kept.
fn image_src(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Escape text for element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_js_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infographic::EntityKind;

    fn tile(slot: usize, kind: EntityKind, header: &str, fact: Option<&str>) -> Tile {
        Tile {
            slot,
            roster_index: slot,
            kind,
            image_path: format!("images/{}.png", header.to_lowercase()),
            header: header.to_string(),
            fact: fact.map(str::to_string),
        }
    }

    #[test]
    fn test_form_page_alert() {
        let html = HtmlFormatter::form_page(Some("Enter valid Name, Height, or Weight"));
        assert!(html.contains("<form id=\"dino-compare\""));
        assert!(html.contains("class=\"alert\""));
        assert!(html.contains("alert(\"Enter valid Name, Height, or Weight\")"));

        let clean = HtmlFormatter::form_page(None);
        assert!(!clean.contains("<script>"));
    }

    #[test]
    fn test_grid_escapes_user_text() {
        let tiles = vec![tile(4, EntityKind::Human, "<b>Ada</b>", None)];
        let html = HtmlFormatter::grid(&tiles);
        assert!(html.contains("&lt;b&gt;Ada&lt;/b&gt;"));
        assert!(!html.contains("<b>Ada"));
    }

    #[test]
    fn test_grid_tiles() {
        let tiles = vec![
            tile(0, EntityKind::Dinosaur, "Triceratops", Some("Fact: Three horns.")),
            tile(4, EntityKind::Human, "Ada", None),
        ];
        let html = HtmlFormatter::grid_page(&tiles);
        assert!(html.contains("class=\"grid-item dino\""));
        assert!(html.contains("<p>Fact: Three horns.</p>"));
        assert!(html.contains("<h3>Ada</h3>"));
        assert!(!html.contains("<form"));
        assert_eq!(html.matches("<p>Fact:").count(), 1);
    }

    #[test]
    fn test_image_src_encodes_spaces() {
        let tiles = vec![tile(0, EntityKind::Dinosaur, "Tyrannosaurus Rex", Some("Fact: Big."))];
        let html = HtmlFormatter::grid(&tiles);
        assert!(html.contains("<img src=\"images/tyrannosaurus%20rex.png\""));
        assert!(html.contains("alt=\"Tyrannosaurus Rex\""));
        assert_eq!(image_src("images/human.png"), "images/human.png");
    }
}
