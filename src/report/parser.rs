// Parse the model's markdown reply into a structured report.
//
// The reply is expected to contain H3 sections ("### Executive Summary",
// "### Tabular Mapping", ...), each with its own loose sub-grammar:
// numbered lists, **bold** label/value pairs, bullet lists, "name: range"
// lines, and five-column pipe tables. Model output is unreliable, so every
// scanner here degrades to an empty default instead of failing: a section
// that cannot be located simply stays empty.

use serde_json::Value;

use super::types::{BiomarkerRow, ExecutiveSummary, ReportDocument, SectionMap};

/// Bold marker introducing the strengths list inside the executive
/// summary. Matched verbatim, including case.
const KEY_STRENGTHS_MARKER: &str = "**Key Strengths:**";

/// Parse a raw markdown report into a [`ReportDocument`].
///
/// Never fails: malformed or missing sections yield their empty defaults.
pub fn parse_report(raw: &str) -> ReportDocument {
    ReportDocument {
        executive_summary: find_section(raw, &["Executive Summary"])
            .map(|block| parse_executive_summary(&block))
            .unwrap_or_default(),
        system_analysis: find_section(
            raw,
            &["System-Specific Analysis", "System Specific Analysis"],
        )
        .map(|block| parse_bold_entities(&block))
        .unwrap_or_default(),
        personalized_action_plan: find_section(raw, &["Personalized Action Plan"])
            .map(|block| parse_bold_entities(&block))
            .unwrap_or_default(),
        interaction_alerts: find_section(raw, &["Interaction Alerts"])
            .map(|block| parse_alert_lines(&block))
            .unwrap_or_default(),
        normal_ranges: find_section(raw, &["Normal Ranges"])
            .map(|block| parse_range_lines(&block))
            .unwrap_or_default(),
        biomarker_table: find_section(raw, &["Tabular Mapping"])
            .map(|block| parse_table_rows(&block))
            .unwrap_or_default(),
    }
}

/// Locate a section by header name (case-insensitive, first match wins)
/// and return its content: the remainder of the header line plus every
/// line up to the next `###` header or end of text.
fn find_section(text: &str, names: &[&str]) -> Option<String> {
    let lines: Vec<&str> = text.lines().collect();

    for (i, line) in lines.iter().enumerate() {
        let Some(header) = header_text(line) else {
            continue;
        };
        let Some(rest) = match_section_name(header, names) else {
            continue;
        };

        let mut body = vec![rest];
        for &following in &lines[i + 1..] {
            if header_text(following).is_some() {
                break;
            }
            body.push(following);
        }
        return Some(body.join("\n"));
    }

    None
}

/// The text after a line's `###` marker, or None for non-header lines.
fn header_text(line: &str) -> Option<&str> {
    line.trim_start().strip_prefix("###")
}

/// Match a header against the known names for a section; returns the
/// remainder of the header line after the name.
fn match_section_name<'a>(header: &'a str, names: &[&str]) -> Option<&'a str> {
    let header = header.trim_start();
    for name in names {
        if let Some(prefix) = header.get(..name.len()) {
            if prefix.eq_ignore_ascii_case(name) {
                return Some(&header[name.len()..]);
            }
        }
    }
    None
}

/// Executive summary: numbered lines become priorities; lines after the
/// `**Key Strengths:**` marker become strengths, blanks discarded.
fn parse_executive_summary(block: &str) -> ExecutiveSummary {
    let mut summary = ExecutiveSummary::default();

    for line in block.lines() {
        if let Some(item) = ordered_item(line) {
            let item = strip_list_marker(item).trim();
            if !item.is_empty() {
                summary.top_priorities.push(item.to_string());
            }
        }
    }

    if let Some(pos) = block.find(KEY_STRENGTHS_MARKER) {
        for line in block[pos + KEY_STRENGTHS_MARKER.len()..].lines() {
            let entry = strip_list_marker(line).trim();
            if !entry.is_empty() {
                summary.key_strengths.push(entry.to_string());
            }
        }
    }

    summary
}

/// The text of an ordered list item ("1. text"), or None.
fn ordered_item(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    let digits = trimmed
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .count();
    if digits == 0 {
        return None;
    }
    trimmed[digits..].strip_prefix('.').map(str::trim_start)
}

/// Strip the leading run of bullet markers (`-`, `*`, `•`) and the
/// whitespace around it.
fn strip_list_marker(line: &str) -> &str {
    let mut rest = line.trim_start();
    while rest.starts_with(['-', '*', '•']) {
        rest = rest.trim_start_matches(['-', '*', '•']).trim_start();
    }
    rest
}

/// Scan a block for `**label**` entries. Each label maps to the text that
/// follows it, up to the next bold marker, the next `###` header, or the
/// end of the block; newlines and whitespace runs collapse to single
/// spaces. A later occurrence of a label overwrites the earlier one.
fn parse_bold_entities(block: &str) -> SectionMap {
    let mut entities = SectionMap::new();
    let mut cursor = 0;

    while let Some(open) = block[cursor..].find("**") {
        let key_start = cursor + open + 2;
        let Some(close) = block[key_start..].find("**") else {
            break;
        };
        let key_end = key_start + close;
        let key = block[key_start..key_end].trim().trim_matches(':').trim();

        let value_start = key_end + 2;
        let rest = &block[value_start..];
        let value_end = [rest.find("**"), rest.find("###")]
            .into_iter()
            .flatten()
            .min()
            .unwrap_or(rest.len());
        let value = rest[..value_end]
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        if !key.is_empty() {
            entities.insert(key.to_string(), Value::String(value));
        }
        cursor = value_start + value_end;
    }

    entities
}

/// Every non-blank line is one alert, bullet markers stripped.
fn parse_alert_lines(block: &str) -> Vec<String> {
    block
        .lines()
        .map(|line| strip_list_marker(line).trim())
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Lines of the form `- <biomarker>: <range>` become one entry each; a
/// later duplicate biomarker overwrites the earlier entry.
fn parse_range_lines(block: &str) -> SectionMap {
    let mut ranges = SectionMap::new();

    for line in block.lines() {
        let Some(rest) = line.trim_start().strip_prefix('-') else {
            continue;
        };
        let Some((name, range)) = rest.split_once(':') else {
            continue;
        };
        let name = name.trim();
        let range = range.trim();
        if !name.is_empty() && !range.is_empty() {
            ranges.insert(name.to_string(), Value::String(range.to_string()));
        }
    }

    ranges
}

/// Collect five-column pipe rows in source order. Rows whose cells are all
/// separator artifacts are dropped, as is the table header (the candidate
/// row sitting directly above an all-separator row).
fn parse_table_rows(block: &str) -> Vec<BiomarkerRow> {
    let lines: Vec<&str> = block.lines().collect();
    let mut rows = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let Some(cells) = split_row_cells(line) else {
            continue;
        };
        if cells.iter().all(|cell| is_separator_cell(cell)) {
            continue;
        }
        if is_header_row(&lines[i + 1..]) {
            continue;
        }
        rows.push(BiomarkerRow {
            biomarker: cells[0].to_string(),
            value: cells[1].to_string(),
            status: cells[2].to_string(),
            insight: cells[3].to_string(),
            reference_range: cells[4].to_string(),
        });
    }

    rows
}

/// A candidate row directly above an all-separator row is the markdown
/// table header, not data.
fn is_header_row(following: &[&str]) -> bool {
    let Some(next) = following.iter().find(|line| !line.trim().is_empty()) else {
        return false;
    };
    match split_row_cells(next) {
        Some(cells) => cells.iter().all(|cell| is_separator_cell(cell)),
        None => false,
    }
}

/// Split a line into exactly five trimmed cells between its first and
/// last pipe. Lines with any other column count are not candidate rows.
fn split_row_cells(line: &str) -> Option<Vec<&str>> {
    let first = line.find('|')?;
    let last = line.rfind('|')?;
    if last <= first {
        return None;
    }
    let cells: Vec<&str> = line[first + 1..last].split('|').map(str::trim).collect();
    (cells.len() == 5).then_some(cells)
}

/// A trimmed cell with no alphanumeric characters carries no content:
/// ":---:", "-", "" and similar divider artifacts.
fn is_separator_cell(cell: &str) -> bool {
    !cell.chars().any(|c| c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> &'static str {
        "### Executive Summary\n\
         **Top Health Priorities:**\n\
         1. Improve vitamin D intake\n\
         2. Lower LDL cholesterol\n\
         \n\
         **Key Strengths:**\n\
         - Excellent kidney function\n\
         - Stable glycemic control\n\
         \n\
         ### System-Specific Analysis\n\
         **Kidney Function Test**\n\
         Status: Normal. Urea, creatinine and eGFR are within range.\n\
         **Lipid Profile**\n\
         Status: Borderline. LDL is mildly elevated.\n\
         \n\
         ### Personalized Action Plan\n\
         **Nutrition:** Increase fatty fish and fortified dairy.\n\
         **Lifestyle:** Add two resistance sessions weekly.\n\
         \n\
         ### Interaction Alerts\n\
         - None noted with current supplements\n\
         * Monitor grapefruit intake with statins\n\
         \n\
         ### Normal Ranges\n\
         - Creatinine: 0.6-1.3 mg/dL\n\
         - Vitamin D: 30-100 ng/mL\n\
         \n\
         ### Tabular Mapping\n\
         | Biomarker | Value | Status | Insight | Reference Range |\n\
         |---|---|---|---|---|\n\
         | Creatinine | 1.0 mg/dL | Normal | Stable | 0.6-1.3 |\n\
         | Vitamin D | 35 ng/mL | Normal | Adequate | 30-100 |\n"
    }

    #[test]
    fn full_report_parses_every_section() {
        let doc = parse_report(sample_report());

        assert_eq!(
            doc.executive_summary.top_priorities,
            ["Improve vitamin D intake", "Lower LDL cholesterol"]
        );
        assert_eq!(
            doc.executive_summary.key_strengths,
            ["Excellent kidney function", "Stable glycemic control"]
        );

        assert_eq!(doc.system_analysis.len(), 2);
        assert_eq!(
            doc.system_analysis["Kidney Function Test"],
            "Status: Normal. Urea, creatinine and eGFR are within range."
        );

        assert_eq!(doc.personalized_action_plan.len(), 2);
        assert_eq!(
            doc.personalized_action_plan["Nutrition"],
            "Increase fatty fish and fortified dairy."
        );

        assert_eq!(
            doc.interaction_alerts,
            [
                "None noted with current supplements",
                "Monitor grapefruit intake with statins"
            ]
        );

        assert_eq!(doc.normal_ranges.len(), 2);
        assert_eq!(doc.normal_ranges["Creatinine"], "0.6-1.3 mg/dL");

        assert_eq!(doc.biomarker_table.len(), 2);
        assert_eq!(doc.biomarker_table[0].biomarker, "Creatinine");
        assert_eq!(doc.biomarker_table[1].value, "35 ng/mL");
    }

    #[test]
    fn text_without_headers_yields_empty_defaults() {
        let doc = parse_report("just some prose\nwith no structure at all\n");
        assert_eq!(doc, ReportDocument::default());
    }

    #[test]
    fn empty_input_yields_empty_defaults() {
        assert_eq!(parse_report(""), ReportDocument::default());
    }

    #[test]
    fn minimal_two_section_report() {
        let raw = "### Executive Summary\n1. Improve sleep\n**Key Strengths:**\nGood metabolic markers\n### Interaction Alerts\n- None noted\n";
        let doc = parse_report(raw);

        assert_eq!(doc.executive_summary.top_priorities, ["Improve sleep"]);
        assert_eq!(doc.executive_summary.key_strengths, ["Good metabolic markers"]);
        assert_eq!(doc.interaction_alerts, ["None noted"]);
        assert!(doc.system_analysis.is_empty());
        assert!(doc.personalized_action_plan.is_empty());
        assert!(doc.normal_ranges.is_empty());
        assert!(doc.biomarker_table.is_empty());
    }

    #[test]
    fn headers_match_case_insensitively() {
        let doc = parse_report("### EXECUTIVE SUMMARY\n1. Hydrate more\n");
        assert_eq!(doc.executive_summary.top_priorities, ["Hydrate more"]);
    }

    #[test]
    fn system_analysis_accepts_both_spellings() {
        let hyphenated = parse_report("### System-Specific Analysis\n**Liver**\nFine.\n");
        let spaced = parse_report("### System Specific Analysis\n**Liver**\nFine.\n");
        assert_eq!(hyphenated.system_analysis["Liver"], "Fine.");
        assert_eq!(spaced.system_analysis["Liver"], "Fine.");
    }

    #[test]
    fn section_content_never_bleeds_into_next() {
        let raw = "### Interaction Alerts\n- Real alert\n### Normal Ranges\n- Iron: 60-170 ug/dL\n";
        let doc = parse_report(raw);
        assert_eq!(doc.interaction_alerts, ["Real alert"]);
        assert_eq!(doc.normal_ranges.len(), 1);
    }

    #[test]
    fn unknown_header_terminates_section() {
        let raw = "### Interaction Alerts\n- Alert one\n### Footnotes\n- Not an alert\n";
        let doc = parse_report(raw);
        assert_eq!(doc.interaction_alerts, ["Alert one"]);
    }

    #[test]
    fn content_on_header_line_is_kept() {
        let doc = parse_report("### Interaction Alerts - Same-line warning\n");
        assert_eq!(doc.interaction_alerts, ["Same-line warning"]);
    }

    // ── Executive summary ───────────────────────────────────────────

    #[test]
    fn numbered_items_tolerate_indentation_and_blanks() {
        let raw = "### Executive Summary\n\n  1. First\n\n\n2.Second\n10. Tenth\n";
        let doc = parse_report(raw);
        assert_eq!(
            doc.executive_summary.top_priorities,
            ["First", "Second", "Tenth"]
        );
    }

    #[test]
    fn non_numbered_lines_ignored_for_priorities() {
        let raw = "### Executive Summary\nIntro text\n1. Only item\nTrailing text\n";
        let doc = parse_report(raw);
        assert_eq!(doc.executive_summary.top_priorities, ["Only item"]);
    }

    #[test]
    fn key_strengths_marker_is_case_sensitive() {
        let raw = "### Executive Summary\n**key strengths:**\nIgnored entry\n";
        let doc = parse_report(raw);
        assert!(doc.executive_summary.key_strengths.is_empty());
    }

    #[test]
    fn missing_strengths_marker_leaves_strengths_empty() {
        let raw = "### Executive Summary\n1. Priority only\n";
        let doc = parse_report(raw);
        assert_eq!(doc.executive_summary.top_priorities, ["Priority only"]);
        assert!(doc.executive_summary.key_strengths.is_empty());
    }

    // ── Bold entities ───────────────────────────────────────────────

    #[test]
    fn bold_entity_value_runs_to_next_bold_label() {
        let block = "**First** one\ntwo\n**Second** three";
        let entities = parse_bold_entities(block);
        assert_eq!(entities["First"], "one two");
        assert_eq!(entities["Second"], "three");
    }

    #[test]
    fn bold_entity_trailing_colon_stripped() {
        let entities = parse_bold_entities("**Nutrition:** eat well");
        assert_eq!(entities["Nutrition"], "eat well");
    }

    #[test]
    fn bold_entity_whitespace_collapsed() {
        let entities = parse_bold_entities("**Label**  spread \n  across   lines ");
        assert_eq!(entities["Label"], "spread across lines");
    }

    #[test]
    fn later_duplicate_label_overwrites() {
        let entities = parse_bold_entities("**Liver** first\n**Liver** second");
        assert_eq!(entities.len(), 1);
        assert_eq!(entities["Liver"], "second");
    }

    #[test]
    fn unclosed_bold_marker_is_ignored() {
        let entities = parse_bold_entities("**Dangling label with no close");
        assert!(entities.is_empty());
    }

    #[test]
    fn empty_bold_label_is_skipped() {
        let entities = parse_bold_entities("**:** orphan text\n**Real** kept");
        assert_eq!(entities.len(), 1);
        assert_eq!(entities["Real"], "kept");
    }

    // ── Alerts ──────────────────────────────────────────────────────

    #[test]
    fn alerts_strip_mixed_bullet_styles() {
        let raw = "### Interaction Alerts\n- Dash alert\n* Star alert\n\u{2022} Dot alert\nBare alert\n";
        let doc = parse_report(raw);
        assert_eq!(
            doc.interaction_alerts,
            ["Dash alert", "Star alert", "Dot alert", "Bare alert"]
        );
    }

    #[test]
    fn alerts_drop_blank_and_marker_only_lines() {
        let raw = "### Interaction Alerts\n\n- \n---\nReal alert\n";
        let doc = parse_report(raw);
        assert_eq!(doc.interaction_alerts, ["Real alert"]);
    }

    // ── Normal ranges ───────────────────────────────────────────────

    #[test]
    fn range_lines_split_on_first_colon() {
        let raw = "### Normal Ranges\n- TSH: 0.4-4.0 mIU/L: adult\n";
        let doc = parse_report(raw);
        assert_eq!(doc.normal_ranges["TSH"], "0.4-4.0 mIU/L: adult");
    }

    #[test]
    fn range_lines_require_dash_and_colon() {
        let raw = "### Normal Ranges\nTSH: 0.4-4.0\n- no colon here\n- : 1.0\n- Empty:   \n- Iron: 60-170\n";
        let doc = parse_report(raw);
        assert_eq!(doc.normal_ranges.len(), 1);
        assert_eq!(doc.normal_ranges["Iron"], "60-170");
    }

    #[test]
    fn later_duplicate_range_overwrites() {
        let raw = "### Normal Ranges\n- Iron: 50-150\n- Iron: 60-170\n";
        let doc = parse_report(raw);
        assert_eq!(doc.normal_ranges.len(), 1);
        assert_eq!(doc.normal_ranges["Iron"], "60-170");
    }

    // ── Biomarker table ─────────────────────────────────────────────

    #[test]
    fn header_and_separator_rows_excluded() {
        let raw = "### Tabular Mapping\n\
                   | Biomarker | Value | Status | Insight | Reference Range |\n\
                   |---|---|---|---|---|\n\
                   | Creatinine | 1.0 mg/dL | Normal | Stable | 0.6-1.3 |\n";
        let doc = parse_report(raw);
        assert_eq!(doc.biomarker_table.len(), 1);
        let row = &doc.biomarker_table[0];
        assert_eq!(row.biomarker, "Creatinine");
        assert_eq!(row.value, "1.0 mg/dL");
        assert_eq!(row.status, "Normal");
        assert_eq!(row.insight, "Stable");
        assert_eq!(row.reference_range, "0.6-1.3");
    }

    #[test]
    fn rows_kept_in_source_order() {
        let raw = "### Tabular Mapping\n\
                   | B | 2 | Low | x | 1-3 |\n\
                   | A | 1 | High | y | 0-2 |\n";
        let doc = parse_report(raw);
        assert_eq!(doc.biomarker_table[0].biomarker, "B");
        assert_eq!(doc.biomarker_table[1].biomarker, "A");
    }

    #[test]
    fn all_empty_row_excluded() {
        let raw = "### Tabular Mapping\n||||||\n| Zinc | 90 | Normal | Fine | 70-120 |\n";
        let doc = parse_report(raw);
        assert_eq!(doc.biomarker_table.len(), 1);
        assert_eq!(doc.biomarker_table[0].biomarker, "Zinc");
    }

    #[test]
    fn pure_separator_row_excluded() {
        let raw = "### Tabular Mapping\n| --- | :--: | - | - | - |\n";
        let doc = parse_report(raw);
        assert!(doc.biomarker_table.is_empty());
    }

    #[test]
    fn row_with_one_real_cell_kept_verbatim() {
        let raw = "### Tabular Mapping\n| --- | 1.0 | Normal | | |\n";
        let doc = parse_report(raw);
        assert_eq!(doc.biomarker_table.len(), 1);
        let row = &doc.biomarker_table[0];
        assert_eq!(row.biomarker, "---");
        assert_eq!(row.value, "1.0");
        assert_eq!(row.status, "Normal");
        assert_eq!(row.insight, "");
        assert_eq!(row.reference_range, "");
    }

    #[test]
    fn wrong_column_counts_are_not_rows() {
        let raw = "### Tabular Mapping\n\
                   | too | few | cells |\n\
                   | one | two | three | four | five | six |\n\
                   | Iron | 100 | Normal | Good | 60-170 |\n";
        let doc = parse_report(raw);
        assert_eq!(doc.biomarker_table.len(), 1);
        assert_eq!(doc.biomarker_table[0].biomarker, "Iron");
    }

    #[test]
    fn table_without_header_still_parses() {
        let raw = "### Tabular Mapping\n| Ferritin | 80 | Normal | Solid stores | 30-400 |\n";
        let doc = parse_report(raw);
        assert_eq!(doc.biomarker_table.len(), 1);
    }

    #[test]
    fn row_cells_are_trimmed() {
        let raw = "### Tabular Mapping\n|  HDL  |  50 mg/dL |Normal| Protective |  40-60  |\n";
        let doc = parse_report(raw);
        let row = &doc.biomarker_table[0];
        assert_eq!(row.biomarker, "HDL");
        assert_eq!(row.value, "50 mg/dL");
        assert_eq!(row.status, "Normal");
    }
}
