//! Markdown blocks of the generated dist README.
//!
//! Every block is returned as lines (or a pre-joined section) so the
//! assembler can concatenate them with `\n` in a fixed order.

use crate::bundle::BundleDescriptor;
use crate::sizes::SizeReport;
use crate::utils::config::{StatsConfig, JS, MINJS};

/// Placeholder for a size that was not measured
const NO_SIZE: &str = "-";

/// General usage notes for the dist files
pub fn info_content() -> Vec<String> {
    [
        "# Using distributed files",
        "",
        "All plotly.js dist bundles inject an object `Plotly` into the global scope.",
        "",
        "Import plotly.js as:",
        "",
        "```html",
        r#"<script type="text/javascript" src="plotly.min.js"></script>"#,
        "```",
        "",
        "or the un-minified version as:",
        "",
        "```html",
        r#"<script type="text/javascript" src="plotly.js" charset="utf-8"></script>"#,
        "```",
        "",
        "To support IE9, put:",
        "",
        "```html",
        r#"<script>if(typeof window.Int16Array !== 'function')document.write("<scri"+"pt src='extras/typedarray.min.js'></scr"+"ipt>");</script>"#,
        r#"<script>document.write("<scri"+"pt src='extras/request_animation_frame.js'></scr"+"ipt>");</script>"#,
        "```",
        "",
        "before the plotly.js script tag.",
        "",
        "To add MathJax, put",
        "",
        "```html",
        r#"<script type="text/javascript" src="mathjax/MathJax.js?config=TeX-AMS-MML_SVG"></script>"#,
        "```",
        "",
        "before the plotly.js script tag. You can grab the relevant MathJax files in `./dist/extras/mathjax/`.",
        "",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect()
}

/// Main bundle import paths, size table and partial bundle table of contents
pub fn main_bundle_info(sizes: &SizeReport, config: &StatsConfig) -> Vec<String> {
    let cdn = &config.cdn_root;
    let version = &config.version;
    let with_meta = sizes
        .with_meta
        .map(|size| size.to_string())
        .unwrap_or_else(|| NO_SIZE.to_string());

    let toc = config
        .partial_bundles
        .iter()
        .map(|bundle| make_bundle_header_info(&bundle.name))
        .collect::<Vec<_>>()
        .join("\n");

    vec![
        "# Bundle information".to_string(),
        String::new(),
        "The main plotly.js bundle includes all the official (non-beta) trace modules.".to_string(),
        String::new(),
        "It can be imported as minified javascript".to_string(),
        "- using dist file `dist/plotly.min.js`".to_string(),
        format!("- using CDN URL {cdn}latest{MINJS} OR {cdn}{version}{MINJS}"),
        String::new(),
        "or as raw javascript:".to_string(),
        "- using dist file `dist/plotly.js`".to_string(),
        format!("- using CDN URL {cdn}latest{JS} OR {cdn}{version}{JS}"),
        "- using CommonJS with `require('plotly.js')`".to_string(),
        String::new(),
        "If you would like to have access to the attribute meta information \
         (including attribute descriptions as on the [schema reference page](https://plot.ly/javascript/reference/)), \
         use dist file `dist/plotly-with-meta.js`"
            .to_string(),
        String::new(),
        "The main plotly.js bundle weights in at:".to_string(),
        String::new(),
        "| plotly.js | plotly.min.js | plotly.min.js + gzip | plotly-with-meta.js |".to_string(),
        "|-----------|---------------|----------------------|---------------------|".to_string(),
        format!(
            "| {} | {} | {} | {} |",
            sizes.raw, sizes.minified, sizes.gzipped, with_meta
        ),
        String::new(),
        "## Partial bundles".to_string(),
        String::new(),
        "Starting in `v1.15.0`, plotly.js also ships with several _partial_ bundles:".to_string(),
        String::new(),
        toc,
        String::new(),
    ]
}

/// Table of contents entry linking to a partial bundle section
pub fn make_bundle_header_info(name: &str) -> String {
    format!("- [{name}](#plotlyjs-{name})")
}

/// Section describing one partial bundle
///
/// `modules` is the scraped list; the configured core modules are prepended.
pub fn make_bundle_info(
    bundle: &BundleDescriptor,
    sizes: &SizeReport,
    modules: &[String],
    config: &StatsConfig,
) -> String {
    let name = &bundle.name;
    let cdn = &config.cdn_root;
    let version = &config.version;

    let module_list: Vec<String> = config
        .core_modules
        .iter()
        .chain(modules)
        .cloned()
        .collect();

    [
        format!("### plotly.js {name}"),
        String::new(),
        format_bundle_info(name, &module_list),
        String::new(),
        "| Way to import | Location |".to_string(),
        "|---------------|----------|".to_string(),
        format!("| dist bundle | `dist/plotly-{name}{JS}` |"),
        format!("| dist bundle (minified) | `dist/plotly-{name}{MINJS}` |"),
        format!("| CDN URL (latest) | {cdn}{name}-latest{JS} |"),
        format!("| CDN URL (latest minified) | {cdn}{name}-latest{MINJS} |"),
        format!("| CDN URL (tagged) | {cdn}{name}-{version}{JS} |"),
        format!("| CDN URL (tagged minified) | {cdn}{name}-{version}{MINJS} |"),
        format!("| CommonJS | `require('plotly.js/lib/index-{name}')` |"),
        String::new(),
        "| Raw size | Minified size | Minified + gzip size |".to_string(),
        "|------|-----------------|------------------------|".to_string(),
        format!("| {} | {} | {} |", sizes.raw, sizes.minified, sizes.gzipped),
        String::new(),
    ]
    .join("\n")
}

/// Sentence enumerating the trace modules of a partial bundle.
///
/// ```
/// use bundle_stats::output::format_bundle_info;
///
/// let modules = vec!["scatter".to_string(), "bar".to_string(), "pie".to_string()];
/// assert_eq!(
///     format_bundle_info("basic", &modules),
///     "The `basic` partial bundle contains the `scatter`, `bar` and `pie` trace modules."
/// );
/// ```
pub fn format_bundle_info(bundle_name: &str, modules: &[String]) -> String {
    let len = modules.len();
    let enumeration = modules
        .iter()
        .enumerate()
        .map(|(i, module)| {
            let ending = if i + 2 == len {
                " and"
            } else if i + 1 < len {
                ","
            } else {
                ""
            };
            format!("`{module}`{ending}")
        })
        .collect::<Vec<_>>()
        .join(" ");

    format!("The `{bundle_name}` partial bundle contains the {enumeration} trace modules.")
}

/// Auto-generation notice closing the README
pub fn footer() -> Vec<String> {
    vec![
        "----------------".to_string(),
        String::new(),
        "_This file is auto-generated by `npm run stats`. \
         Please do not edit this file directly._"
            .to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sizes::PrettySize;
    use pretty_assertions::assert_eq;
    use std::path::Path;

    fn modules(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn sizes(with_meta: Option<u64>) -> SizeReport {
        SizeReport {
            raw: PrettySize::new(2048),
            minified: PrettySize::new(1024),
            gzipped: PrettySize::new(512),
            with_meta: with_meta.map(PrettySize::new),
        }
    }

    #[test]
    fn test_single_module_has_no_conjunction() {
        let sentence = format_bundle_info("basic", &modules(&["scatter"]));
        assert_eq!(
            sentence,
            "The `basic` partial bundle contains the `scatter` trace modules."
        );
        assert!(!sentence.contains(" and"));
        assert!(!sentence.contains(','));
    }

    #[test]
    fn test_two_modules() {
        assert_eq!(
            format_bundle_info("geo", &modules(&["A", "B"])),
            "The `geo` partial bundle contains the `A` and `B` trace modules."
        );
    }

    #[test]
    fn test_three_modules() {
        assert_eq!(
            format_bundle_info("geo", &modules(&["A", "B", "C"])),
            "The `geo` partial bundle contains the `A`, `B` and `C` trace modules."
        );
    }

    #[test]
    fn test_five_modules() {
        assert_eq!(
            format_bundle_info("cartesian", &modules(&["a", "b", "c", "d", "e"])),
            "The `cartesian` partial bundle contains the `a`, `b`, `c`, `d` and `e` trace modules."
        );
    }

    #[test]
    fn test_header_info() {
        assert_eq!(make_bundle_header_info("gl3d"), "- [gl3d](#plotlyjs-gl3d)");
    }

    #[test]
    fn test_bundle_info_section() {
        let config = StatsConfig::with_defaults(Path::new("/repo"), "1.16.0");
        let bundle = BundleDescriptor::partial(Path::new("/repo"), "geo");

        let section = make_bundle_info(&bundle, &sizes(None), &modules(&["scattergeo", "choropleth"]), &config);
        let lines: Vec<&str> = section.lines().collect();

        assert_eq!(lines[0], "### plotly.js geo");
        assert_eq!(
            lines[2],
            "The `geo` partial bundle contains the `scatter`, `scattergeo` and `choropleth` trace modules."
        );
        assert!(section.contains("| dist bundle | `dist/plotly-geo.js` |"));
        assert!(section.contains("| CDN URL (latest minified) | https://cdn.plot.ly/plotly-geo-latest.min.js |"));
        assert!(section.contains("| CDN URL (tagged) | https://cdn.plot.ly/plotly-geo-1.16.0.js |"));
        assert!(section.contains("| CommonJS | `require('plotly.js/lib/index-geo')` |"));
        assert!(section.contains("| 2 kB | 1 kB | 512 Bytes |"));
        assert!(section.ends_with("|\n"));
    }

    #[test]
    fn test_main_bundle_info() {
        let root = Path::new("/repo");
        let mut config = StatsConfig::with_defaults(root, "1.16.0");
        config.partial_bundles = vec![
            BundleDescriptor::partial(root, "basic"),
            BundleDescriptor::partial(root, "geo"),
        ];

        let content = main_bundle_info(&sizes(Some(4096)), &config).join("\n");

        assert!(content.contains("https://cdn.plot.ly/plotly-latest.min.js OR https://cdn.plot.ly/plotly-1.16.0.min.js"));
        assert!(content.contains("| 2 kB | 1 kB | 512 Bytes | 4 kB |"));
        assert!(content.contains("- [basic](#plotlyjs-basic)\n- [geo](#plotlyjs-geo)"));
    }

    #[test]
    fn test_main_bundle_info_without_meta() {
        let config = StatsConfig::with_defaults(Path::new("/repo"), "1.16.0");
        let content = main_bundle_info(&sizes(None), &config).join("\n");

        assert!(content.contains("| 2 kB | 1 kB | 512 Bytes | - |"));
    }

    #[test]
    fn test_footer() {
        let footer = footer();
        assert_eq!(footer[0], "----------------");
        assert!(footer[2].contains("auto-generated"));
    }
}
