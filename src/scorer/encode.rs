use super::engine::{ResolvedAttempt, Step};
use super::format::format_score;

const POINT_DECIMALS: usize = 3;

/// Compact code, e.g. `2TL2T1E+1Drop`.
///
/// Deduction-only attempts join deduction abbreviations with `+`.
pub fn identifier(attempt: &ResolvedAttempt<'_>) -> String {
    if !attempt.has_trick {
        return attempt
            .steps
            .iter()
            .filter_map(|step| match step {
                Step::Deduction(def) => Some(def.abbreviation.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("+");
    }

    let mut out = String::new();
    for step in &attempt.steps {
        match step {
            Step::Base { trick, tier, .. } => {
                out.push_str(tier.prefix());
                out.push_str(&trick.abbreviation);
            }
            Step::Level { level, .. } => out.push_str(&format!("L{}", level)),
            Step::Feature(def) => out.push_str(&def.abbreviation),
            Step::Execution { grade, .. } => {
                if *grade != 0 {
                    out.push_str(&format!("E{:+}", grade));
                }
            }
            Step::Deduction(def) => out.push_str(&def.abbreviation),
        }
    }
    out
}

/// Readable form, e.g. `Toss/High(2D) ×L2 ×Turn-360 ×E+1 +Unintentional Drop(-0.3)`.
pub fn description(attempt: &ResolvedAttempt<'_>) -> String {
    if !attempt.has_trick {
        return attempt
            .steps
            .iter()
            .filter_map(|step| match step {
                Step::Deduction(def) => Some(deduction_term(&def.name, def.points)),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join(" + ");
    }

    let mut terms = Vec::with_capacity(attempt.steps.len());
    for step in &attempt.steps {
        match step {
            Step::Base { trick, tier, .. } => terms.push(format!("{}({})", trick.name, tier)),
            Step::Level { level, .. } => terms.push(format!("×L{}", level)),
            Step::Feature(def) => terms.push(format!("{}{}", def.effect.operator(), def.name)),
            Step::Execution { grade, .. } => {
                if *grade != 0 {
                    terms.push(format!("×E{:+}", grade));
                }
            }
            Step::Deduction(def) => terms.push(format!("+{}", deduction_term(&def.name, def.points))),
        }
    }
    terms.join(" ")
}

fn deduction_term(name: &str, points: f64) -> String {
    format!("{}({})", name, format_score(points, POINT_DECIMALS))
}
