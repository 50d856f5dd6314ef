use camino::{Utf8Path, Utf8PathBuf};
use deploymap::render::generate_svg;
use deploymap::{DeploymentMap, MapWarning, RenderOptions, layout_map, map_from_json};
use rayon::prelude::*;
use std::fs;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo xtask <command>");
        eprintln!("Commands:");
        eprintln!("  gallery [DIR]   Render every map JSON in DIR (default tests/maps) to gallery.html");
        std::process::exit(1);
    }

    match args[1].as_str() {
        "gallery" => gallery(args.get(2).map(Utf8PathBuf::from)),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            std::process::exit(1);
        }
    }
}

/// One rendered map, or the reason it could not be rendered
struct Entry {
    name: String,
    svg: Result<String, String>,
    warnings: Vec<String>,
}

fn render_entry(path: &Utf8Path) -> Entry {
    let name = path.file_stem().unwrap_or(path.as_str()).to_string();
    let rendered = fs::read_to_string(path)
        .map_err(|e| format!("could not read {}: {}", path, e))
        .and_then(|source| map_from_json(path.as_str(), &source).map_err(|e| format!("{:?}", miette::Report::new(e))))
        .and_then(|map: DeploymentMap| {
            let layout = layout_map(&map).map_err(|e| e.to_string())?;
            let warnings: Vec<String> = layout.warnings.iter().map(MapWarning::to_string).collect();
            generate_svg(&layout, &RenderOptions::default())
                .map(|svg| (svg, warnings))
                .map_err(|e| e.to_string())
        });

    match rendered {
        Ok((svg, warnings)) => Entry {
            name,
            svg: Ok(svg),
            warnings,
        },
        Err(e) => Entry {
            name,
            svg: Err(e),
            warnings: Vec::new(),
        },
    }
}

fn gallery(dir: Option<Utf8PathBuf>) {
    let manifest_dir = Utf8Path::new(env!("CARGO_MANIFEST_DIR"));
    let root = manifest_dir.parent().unwrap_or(manifest_dir);
    let maps_dir = dir.unwrap_or_else(|| root.join("tests/maps"));
    let output_path = root.join("gallery.html");

    let mut paths: Vec<Utf8PathBuf> = fs::read_dir(&maps_dir)
        .unwrap_or_else(|e| {
            eprintln!("Failed to read {}: {}", maps_dir, e);
            std::process::exit(1);
        })
        .filter_map(|e| e.ok())
        .filter_map(|e| Utf8PathBuf::from_path_buf(e.path()).ok())
        .filter(|p| p.extension() == Some("json"))
        .collect();
    paths.sort();

    let entries: Vec<Entry> = paths.par_iter().map(|p| render_entry(p)).collect();

    let total = entries.len();
    let clean = entries
        .iter()
        .filter(|e| e.svg.is_ok() && e.warnings.is_empty())
        .count();

    let mut html = String::new();
    html.push_str(&format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Deployment Map Gallery</title>
    <style>
        body {{
            font-family: system-ui, sans-serif;
            margin: 0;
            padding: 24px;
            background: #eee;
            color: #333;
        }}
        h1 {{
            font-weight: 600;
            font-size: 20px;
            margin: 0 0 24px 0;
        }}
        .card {{
            background: white;
            border-radius: 8px;
            box-shadow: 0 1px 3px rgba(0,0,0,0.08);
            margin-bottom: 16px;
            padding: 12px 16px;
        }}
        .card h2 {{
            font-size: 13px;
            margin: 0 0 8px 0;
        }}
        .card svg {{
            max-width: 100%;
            height: auto;
            max-height: 600px;
        }}
        .warning {{
            color: #92400e;
            font-size: 12px;
        }}
        .error {{
            color: #991b1b;
            font-family: monospace;
            white-space: pre-wrap;
        }}
    </style>
</head>
<body>
<h1>Deployment Map Gallery ({} / {} without warnings)</h1>
"#,
        clean, total
    ));

    for entry in &entries {
        html.push_str(&format!(
            "<div class=\"card\" id=\"{0}\">\n<h2>{0}</h2>\n",
            html_escape(&entry.name)
        ));
        match &entry.svg {
            Ok(svg) => html.push_str(svg),
            Err(e) => html.push_str(&format!("<div class=\"error\">{}</div>", html_escape(e))),
        }
        for warning in &entry.warnings {
            html.push_str(&format!(
                "\n<div class=\"warning\">{}</div>",
                html_escape(warning)
            ));
        }
        html.push_str("\n</div>\n");
    }

    html.push_str("</body>\n</html>\n");

    if let Err(e) = fs::write(&output_path, html) {
        eprintln!("Failed to write {}: {}", output_path, e);
        std::process::exit(1);
    }
    eprintln!("Wrote {} maps to {}", total, output_path);
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
