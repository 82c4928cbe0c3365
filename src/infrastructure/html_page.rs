// HTML page - Renders a composed dashboard page; Leaflet draws the map from the encoded artifact
use crate::domain::metric::MetricPair;
use crate::domain::page::{Block, Page};

const HEAD_ASSETS: &str = r#"
  <!-- Leaflet 1.9.4 -->
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.css" crossorigin="anonymous"
    referrerpolicy="no-referrer" />
  <script src="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.js" crossorigin="anonymous"
    referrerpolicy="no-referrer"></script>

  <!-- Controls -->
  <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/leaflet.fullscreen@3.0.0/Control.FullScreen.css" />
  <script src="https://cdn.jsdelivr.net/npm/leaflet.fullscreen@3.0.0/Control.FullScreen.min.js"></script>
  <link rel="stylesheet" href="https://cdn.jsdelivr.net/gh/ardhi/Leaflet.MousePosition/src/L.Control.MousePosition.min.css" />
  <script src="https://cdn.jsdelivr.net/gh/ardhi/Leaflet.MousePosition/src/L.Control.MousePosition.min.js"></script>
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/leaflet-minimap/3.6.1/Control.MiniMap.min.css" />
  <script src="https://cdnjs.cloudflare.com/ajax/libs/leaflet-minimap/3.6.1/Control.MiniMap.min.js"></script>
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css"
    crossorigin="anonymous" referrerpolicy="no-referrer" />

  <style>
    body { font-family: "Source Sans Pro", system-ui, sans-serif; margin: 0; color: #31333f; }
    main { margin: 0 auto; padding: 2rem 3rem; }
    main.centered { max-width: 46rem; }
    .columns { display: flex; gap: 2rem; }
    .columns > div { flex: 1; }
    .metric { margin-bottom: 1rem; }
    .metric .label { font-size: .875rem; }
    .metric .value { font-size: 2.25rem; }
    .alert { padding: 1rem; border-radius: .5rem; margin: 1rem 0; white-space: pre-line; }
    .alert.info { background: #e8f1fb; color: #004280; }
    .alert.error { background: #fde8e8; color: #7d1a1a; }
    .map-marker { font-size: 1.5rem; text-shadow: 0 0 3px #fff; }
  </style>
"#;

const MAP_SCRIPT: &str = r#"
  <script>
    (function () {
      const TILES = {
        "CartoDB positron": {
          url: "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png",
          attribution: "&copy; OpenStreetMap contributors &copy; CARTO"
        }
      };

      document.querySelectorAll("script.map-data").forEach(function (node) {
        const spec = JSON.parse(node.textContent);
        const tiles = TILES[spec.tiles] || TILES["CartoDB positron"];
        const map = L.map(node.dataset.target).setView([spec.center.lat, spec.center.lng], spec.zoom);
        L.tileLayer(tiles.url, { attribution: tiles.attribution, subdomains: "abcd", maxZoom: 20 }).addTo(map);

        spec.layers.forEach(function (layer) {
          if (layer.type === "polygon") {
            const r = layer.region;
            L.polygon(r.vertices.map(function (v) { return [v.lat, v.lng]; }), {
              color: r.color, fill: true, fillColor: r.color,
              fillOpacity: layer.fill_opacity, weight: layer.weight
            }).bindPopup(layer.popup).bindTooltip(layer.tooltip).addTo(map);
          } else if (layer.type === "marker") {
            const m = layer.marker;
            const icon = L.divIcon({
              className: "map-marker",
              html: '<i class="fa-solid fa-circle-info" style="color:' + m.color + '"></i>'
            });
            L.marker([m.position.lat, m.position.lng], { icon: icon })
              .bindPopup(layer.popup).bindTooltip(layer.tooltip).addTo(map);
          }
        });

        spec.controls.forEach(function (control) {
          if (control === "fullscreen") {
            L.control.fullscreen().addTo(map);
          } else if (control === "mousePosition") {
            L.control.mousePosition().addTo(map);
          } else if (control === "miniMap") {
            new L.Control.MiniMap(L.tileLayer(tiles.url, { subdomains: "abcd" }), { toggleDisplay: true }).addTo(map);
          }
        });
      });
    })();
  </script>
"#;

pub fn render_page(page: &Page) -> String {
    let mut html = String::with_capacity(8 * 1024);
    let mut map_count = 0;

    html.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("  <meta charset=\"UTF-8\" />\n");
    html.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\" />\n");
    html.push_str(&format!("  <title>{}</title>\n", escape(&page.title)));
    html.push_str(&format!(
        "  <link rel=\"icon\" href=\"data:image/svg+xml,<svg xmlns=%22http://www.w3.org/2000/svg%22 viewBox=%220 0 100 100%22><text y=%22.9em%22 font-size=%2290%22>{}</text></svg>\" />\n",
        escape(&page.icon)
    ));
    html.push_str(HEAD_ASSETS);
    html.push_str("</head>\n<body>\n");

    let layout = if page.wide { "wide" } else { "centered" };
    html.push_str(&format!("<main class=\"{}\">\n", layout));
    html.push_str(&format!("  <h1>{}</h1>\n", escape(&page.heading)));
    for paragraph in page.description.split("\n\n") {
        html.push_str(&format!("  <p>{}</p>\n", escape(paragraph.trim())));
    }

    for block in &page.blocks {
        match block {
            Block::Map {
                encoded,
                width,
                height,
                ..
            } => {
                let id = format!("map-{}", map_count);
                map_count += 1;
                html.push_str(&format!(
                    "  <div id=\"{}\" style=\"width: {}px; height: {}px;\"></div>\n",
                    id, width, height
                ));
                html.push_str(&format!(
                    "  <script type=\"application/json\" class=\"map-data\" data-target=\"{}\">{}</script>\n",
                    id,
                    encoded.replace("</", "<\\/")
                ));
            }
            Block::Subheader(text) => {
                html.push_str(&format!("  <h3>{}</h3>\n", escape(text)));
            }
            Block::MetricColumns(columns) => render_columns(&mut html, columns),
            Block::Info(text) => {
                html.push_str(&format!("  <div class=\"alert info\">{}</div>\n", escape(text)));
            }
            Block::Error(text) => {
                html.push_str(&format!("  <div class=\"alert error\">{}</div>\n", escape(text)));
            }
        }
    }

    html.push_str("</main>\n");
    if map_count > 0 {
        html.push_str(MAP_SCRIPT);
    }
    html.push_str("</body>\n</html>\n");

    html
}

fn render_columns(html: &mut String, columns: &[Vec<MetricPair>]) {
    html.push_str("  <div class=\"columns\">\n");
    for column in columns {
        html.push_str("    <div>\n");
        for metric in column {
            html.push_str(&format!(
                "      <div class=\"metric\"><div class=\"label\">{}</div><div class=\"value\">{}</div></div>\n",
                escape(&metric.label),
                escape(&metric.value)
            ));
        }
        html.push_str("    </div>\n");
    }
    html.push_str("  </div>\n");
}

fn escape(text: &str) -> String {
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
