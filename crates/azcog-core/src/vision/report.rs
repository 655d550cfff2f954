//! Human-readable per-image report lines.

use super::model::AnalysisResult;

/// Report lines for one analysis. Sections with nothing to show are omitted.
pub fn report_lines(a: &AnalysisResult) -> Vec<String> {
    let mut out = Vec::new();

    if !a.categories.is_empty() {
        out.push(" Categories:".to_string());
        for c in &a.categories {
            out.push(format!("  - {} (Score: {:.2})", c.name, c.score));
        }
    }

    if !a.tags.is_empty() {
        let names: Vec<&str> = a.tags.iter().map(|t| t.name.as_str()).collect();
        out.push(" Tags:".to_string());
        out.push(format!("  - {}", names.join(", ")));
    }

    if !a.captions().is_empty() {
        out.push(" Description Captions:".to_string());
        for c in a.captions() {
            out.push(format!("  - {} (Confidence: {:.2})", c.text, c.confidence));
        }
    }

    if !a.faces.is_empty() {
        out.push(" Faces:".to_string());
        for face in &a.faces {
            let age = face
                .age
                .map(|v| v.to_string())
                .unwrap_or_else(|| "?".to_string());
            let rect = face
                .face_rectangle
                .map(|r| r.to_string())
                .unwrap_or_else(|| "-".to_string());
            out.push(format!(
                "  - Age: {}, Gender: {}, Rectangle: {}",
                age,
                face.gender.as_deref().unwrap_or("?"),
                rect
            ));
        }
    }

    if !a.objects.is_empty() {
        out.push(" Objects:".to_string());
        for o in &a.objects {
            let rect = o
                .rectangle
                .map(|r| r.to_string())
                .unwrap_or_else(|| "-".to_string());
            out.push(format!(
                "  - Object: {}, Confidence: {:.2}, Rectangle: {}",
                o.label, o.confidence, rect
            ));
        }
    }

    if let Some(color) = &a.color {
        out.push(" Color:".to_string());
        out.push(format!(
            "  - Dominant Colors: {}",
            color.dominant_colors.join(", ")
        ));
        out.push(format!(
            "  - Accent Color: #{}",
            color.accent_color.as_deref().unwrap_or("")
        ));
        out.push(format!("  - Is BW Image: {}", color.is_black_and_white()));
    }

    if !a.brands.is_empty() {
        out.push(" Brands:".to_string());
        for b in &a.brands {
            out.push(format!(
                "  - Brand: {}, Confidence: {:.2}",
                b.name, b.confidence
            ));
        }
    }

    if let Some(adult) = &a.adult {
        out.push(" Adult Content:".to_string());
        out.push(format!(
            "  - Is Adult Content: {} (Score: {:.2})",
            adult.is_adult_content, adult.adult_score
        ));
        out.push(format!(
            "  - Is Racy Content: {} (Score: {:.2})",
            adult.is_racy_content, adult.racy_score
        ));
    }

    out
}
