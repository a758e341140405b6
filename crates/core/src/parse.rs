use crate::{Category, Participant};

/// Turns raw delimited text into participant candidates. One participant per
/// line, `name[,weight]`, with `;` accepted as an alternate separator. Lines
/// without a name are dropped; dedup is the merger's job, not ours.
pub fn parse_roster(text: &str, category: Category) -> Vec<Participant> {
    text.lines()
        .filter_map(|line| parse_line(line, category))
        .collect()
}

fn parse_line(line: &str, category: Category) -> Option<Participant> {
    let mut fields = line.split([',', ';']);
    let name = fields.next()?.trim();
    if name.is_empty() {
        return None;
    }
    let weight = fields.next().map(parse_weight).unwrap_or(1);
    Some(Participant::new(name, weight, category))
}

// Absent, unparsable and non-positive weights all fall back to a single
// ticket. The fallback is silent: callers cannot tell the cases apart.
fn parse_weight(field: &str) -> u32 {
    match field.trim().parse::<u32>() {
        Ok(weight) if weight >= 1 => weight,
        _ => 1,
    }
}
