//! 分類結果のコンソール表示

use keyword_tagger_common::{ClassificationSummary, Dataset};

/// セル表示の最大文字数
const MAX_CELL_WIDTH: usize = 32;

/// 先頭n行を表形式の文字列にする
pub fn render_preview(dataset: &Dataset, rows: usize) -> String {
    let head = dataset.head(rows);

    let cells: Vec<Vec<String>> = head
        .rows()
        .iter()
        .map(|row| row.iter().map(|c| truncate(&c.to_text())).collect())
        .collect();
    let header: Vec<String> = head.columns().iter().map(|c| truncate(c)).collect();

    let widths: Vec<usize> = header
        .iter()
        .enumerate()
        .map(|(i, h)| {
            cells
                .iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    out.push_str(&format_line(&header, &widths));
    out.push('\n');
    out.push_str(
        &widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    out.push('\n');
    for row in &cells {
        out.push_str(&format_line(row, &widths));
        out.push('\n');
    }
    out
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

fn truncate(text: &str) -> String {
    let single_line = text.replace(['\n', '\r'], " ");
    if single_line.chars().count() <= MAX_CELL_WIDTH {
        single_line
    } else {
        let cut: String = single_line.chars().take(MAX_CELL_WIDTH - 1).collect();
        format!("{}…", cut)
    }
}

/// 集計結果を表示
pub fn print_summary(summary: &ClassificationSummary) {
    println!("  レコード数: {}", summary.total_records);
    println!("  タグ付き: {}", summary.tagged_records());
    println!("  タグなし: {}", summary.untagged_records);
    for (name, count) in &summary.category_counts {
        println!("  {}: {}件", name, count);
    }
}
