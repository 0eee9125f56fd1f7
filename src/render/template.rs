use crate::error::{BuildError, BuildResult};

/// One placeholder and the text that replaces it.
#[derive(Debug, Clone, Copy)]
pub struct Slot<'a> {
    pub marker: &'a str,
    pub value: &'a str,
    pub required: bool,
}

impl<'a> Slot<'a> {
    pub fn required(marker: &'a str, value: &'a str) -> Self {
        Self {
            marker,
            value,
            required: true,
        }
    }

    pub fn optional(marker: &'a str, value: &'a str) -> Self {
        Self {
            marker,
            value,
            required: false,
        }
    }
}

/// Replaces every marker occurrence in `source` in a single left-to-right
/// pass. Substituted text is never scanned again, so entry content that
/// happens to contain a marker stays literal.
pub fn substitute(template_name: &str, source: &str, slots: &[Slot<'_>]) -> BuildResult<String> {
    if let Some(missing) = slots
        .iter()
        .find(|slot| slot.required && !source.contains(slot.marker))
    {
        return Err(BuildError::TemplateShape {
            template: template_name.to_string(),
            marker: missing.marker.to_string(),
        });
    }

    let mut rendered = String::with_capacity(source.len());
    let mut rest = source;

    loop {
        let next = slots
            .iter()
            .filter(|slot| !slot.marker.is_empty())
            .filter_map(|slot| rest.find(slot.marker).map(|at| (at, slot)))
            .min_by_key(|(at, _)| *at);

        match next {
            Some((at, slot)) => {
                rendered.push_str(&rest[..at]);
                rendered.push_str(slot.value);
                rest = &rest[at + slot.marker.len()..];
            }
            None => {
                rendered.push_str(rest);
                break;
            }
        }
    }

    Ok(rendered)
}
