//! Output formatting utilities

use crate::domain::Defect;

/// Format a list of defects for display
pub fn format_defect_list(defects: &[Defect]) -> String {
    if defects.is_empty() {
        return "No defects found".to_string();
    }

    let mut output = String::new();
    for defect in defects {
        output.push_str(&format!("{}\n", defect));
    }
    output.push_str(&format!("{} defect(s)\n", defects.len()));
    output
}
