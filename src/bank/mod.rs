//! Fallback content bank.
//!
//! Static, categorized compliment templates plus the modifier phrases used
//! to intensify them. [`FallbackBank::builtin()`] carries the shipped
//! content; [`FallbackBank::with_templates()`] swaps a category's list,
//! which tests use to make synthesis predictable.
//!
//! All randomness is drawn from a caller-supplied [`Rng`] so a seeded
//! generator produces reproducible output.

mod builtin;
mod personalize;

pub use personalize::personalize;

use std::collections::HashMap;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::types::{ComplimentType, SpecificityLevel};
use crate::{PlauditError, Result};

/// Templates containing this already read as a simile and are never
/// intensified.
const SIMILE_MARKER: &str = " like ";

/// Probability that a medium/high template receives a modifier.
const MODIFIER_PROBABILITY: f64 = 0.5;

/// Categorized compliment templates and specificity modifiers.
#[derive(Debug, Clone)]
pub struct FallbackBank {
    templates: HashMap<ComplimentType, Vec<String>>,
    modifiers: HashMap<SpecificityLevel, Vec<String>>,
}

impl Default for FallbackBank {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FallbackBank {
    /// The shipped templates and modifiers.
    pub fn builtin() -> Self {
        let owned = |list: &[&str]| list.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        let templates = HashMap::from([
            (ComplimentType::Animal, owned(builtin::ANIMAL)),
            (ComplimentType::Object, owned(builtin::OBJECT)),
            (ComplimentType::Skill, owned(builtin::SKILL)),
            (ComplimentType::Random, owned(builtin::RANDOM)),
        ]);
        let modifiers = HashMap::from([
            (SpecificityLevel::Low, owned(builtin::LOW)),
            (SpecificityLevel::Medium, owned(builtin::MEDIUM)),
            (SpecificityLevel::High, owned(builtin::HIGH)),
        ]);

        Self {
            templates,
            modifiers,
        }
    }

    /// Replace the template list for one category.
    pub fn with_templates<I, S>(mut self, kind: ComplimentType, templates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.templates
            .insert(kind, templates.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the modifier list for one specificity level.
    pub fn with_modifiers<I, S>(mut self, level: SpecificityLevel, modifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.modifiers
            .insert(level, modifiers.into_iter().map(Into::into).collect());
        self
    }

    /// Templates for `kind`.
    ///
    /// A category the bank has no list for falls back to the `random` list.
    pub fn templates(&self, kind: ComplimentType) -> &[String] {
        self.templates
            .get(&kind)
            .or_else(|| self.templates.get(&ComplimentType::Random))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Templates for a category given by name; unknown names get `random`.
    pub fn templates_named(&self, name: &str) -> &[String] {
        self.templates(ComplimentType::lenient(name))
    }

    /// Modifier phrases for `level`.
    pub fn modifiers(&self, level: SpecificityLevel) -> &[String] {
        self.modifiers
            .get(&level)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Draw a template for `kind` uniformly at random.
    pub fn pick_template<R: Rng + ?Sized>(&self, kind: ComplimentType, rng: &mut R) -> Result<&str> {
        self.templates(kind)
            .choose(rng)
            .map(String::as_str)
            .ok_or(PlauditError::EmptyBank {
                kind,
                what: "templates",
            })
    }

    /// Possibly blend a modifier phrase into `template`.
    ///
    /// `low` never changes the template. For `medium` and `high`, a modifier
    /// is drawn from the level's list and, with 50% probability and only if
    /// the template has no `" like "`, spliced in by [`intensify`].
    pub fn apply_specificity<R: Rng + ?Sized>(
        &self,
        kind: ComplimentType,
        template: &str,
        level: SpecificityLevel,
        rng: &mut R,
    ) -> Result<String> {
        if level == SpecificityLevel::Low {
            return Ok(template.to_string());
        }

        let modifier = self
            .modifiers(level)
            .choose(rng)
            .ok_or(PlauditError::EmptyBank {
                kind,
                what: "modifiers",
            })?;

        if rng.random_bool(MODIFIER_PROBABILITY) && !template.contains(SIMILE_MARKER) {
            Ok(intensify(template, modifier))
        } else {
            Ok(template.to_string())
        }
    }

    /// One synthesis step: pick a template and apply specificity.
    pub fn synthesize<R: Rng + ?Sized>(
        &self,
        kind: ComplimentType,
        level: SpecificityLevel,
        rng: &mut R,
    ) -> Result<String> {
        let template = self.pick_template(kind, rng)?;
        self.apply_specificity(kind, template, level, rng)
    }
}

/// Replace the first literal `is` or `are` in `template` with `is {modifier}`.
///
/// The match is a plain case-sensitive substring search, so the `is` inside
/// `"This"` counts. Templates with neither are returned unchanged.
pub fn intensify(template: &str, modifier: &str) -> String {
    let hit = match (template.find("is"), template.find("are")) {
        (Some(is), Some(are)) if are < is => Some((are, "are".len())),
        (Some(is), _) => Some((is, "is".len())),
        (None, Some(are)) => Some((are, "are".len())),
        (None, None) => None,
    };

    match hit {
        Some((start, len)) => format!(
            "{}is {modifier}{}",
            &template[..start],
            &template[start + len..]
        ),
        None => template.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn builtin_lists_are_sized() {
        let bank = FallbackBank::builtin();
        for kind in ComplimentType::ALL {
            let n = bank.templates(kind).len();
            assert!((12..=16).contains(&n), "{kind} has {n} templates");
        }
        assert_eq!(bank.modifiers(SpecificityLevel::Low).len(), 6);
        assert_eq!(bank.modifiers(SpecificityLevel::Medium).len(), 5);
        assert_eq!(bank.modifiers(SpecificityLevel::High).len(), 5);
    }

    #[test]
    fn pick_template_draws_from_category() {
        let bank = FallbackBank::builtin();
        let mut rng = rng();
        for _ in 0..50 {
            let t = bank.pick_template(ComplimentType::Skill, &mut rng).unwrap();
            assert!(bank.templates(ComplimentType::Skill).iter().any(|s| s == t));
        }
    }

    #[test]
    fn unknown_name_routes_to_random_list() {
        let bank = FallbackBank::builtin();
        assert_eq!(
            bank.templates_named("dragon"),
            bank.templates(ComplimentType::Random)
        );
    }

    #[test]
    fn empty_category_is_a_bank_defect() {
        let bank = FallbackBank::builtin().with_templates(ComplimentType::Animal, Vec::<String>::new());
        let err = bank.pick_template(ComplimentType::Animal, &mut rng()).unwrap_err();
        assert!(matches!(
            err,
            PlauditError::EmptyBank {
                kind: ComplimentType::Animal,
                what: "templates"
            }
        ));
    }

    #[test]
    fn empty_modifiers_is_a_bank_defect() {
        let bank = FallbackBank::builtin().with_modifiers(SpecificityLevel::High, Vec::<String>::new());
        let result = bank.apply_specificity(
            ComplimentType::Random,
            "Your work is great",
            SpecificityLevel::High,
            &mut rng(),
        );
        assert!(matches!(result, Err(PlauditError::EmptyBank { what: "modifiers", .. })));
    }

    #[test]
    fn low_specificity_is_identity() {
        let bank = FallbackBank::builtin();
        let mut rng = rng();
        for _ in 0..20 {
            let out = bank
                .apply_specificity(
                    ComplimentType::Random,
                    "Your work is great",
                    SpecificityLevel::Low,
                    &mut rng,
                )
                .unwrap();
            assert_eq!(out, "Your work is great");
        }
    }

    #[test]
    fn similes_are_never_intensified() {
        let bank = FallbackBank::builtin();
        let mut rng = rng();
        let template = "Your smile is like sunshine";
        for _ in 0..50 {
            let out = bank
                .apply_specificity(ComplimentType::Random, template, SpecificityLevel::High, &mut rng)
                .unwrap();
            assert_eq!(out, template);
        }
    }

    #[test]
    fn medium_and_high_intensify_about_half_the_time() {
        let bank = FallbackBank::builtin();
        let mut rng = rng();
        let template = "Your work is great";
        let mut changed = 0;
        for _ in 0..200 {
            let out = bank
                .apply_specificity(ComplimentType::Random, template, SpecificityLevel::High, &mut rng)
                .unwrap();
            if out != template {
                changed += 1;
                let ok = bank
                    .modifiers(SpecificityLevel::High)
                    .iter()
                    .any(|m| out == format!("Your work is {m} great"));
                assert!(ok, "unexpected output: {out}");
            }
        }
        assert!((50..150).contains(&changed), "changed {changed} of 200");
    }

    #[test]
    fn intensify_replaces_first_is() {
        assert_eq!(
            intensify("Your work is great and is loved", "truly"),
            "Your work is truly great and is loved"
        );
    }

    #[test]
    fn intensify_replaces_are_with_is() {
        assert_eq!(
            intensify("Your ideas are bold", "truly"),
            "Your ideas is truly bold"
        );
    }

    #[test]
    fn intensify_is_a_substring_match() {
        // The "is" in "This" comes before the "are"
        assert_eq!(
            intensify("This are nice", "truly"),
            "This truly are nice"
        );
        assert_eq!(intensify("Nothing here", "truly"), "Nothing here");
        // Case-sensitive: "Is" and "Are" do not match
        assert_eq!(intensify("Are we done", "truly"), "Are we done");
    }

    #[test]
    fn seeded_synthesis_is_reproducible() {
        let bank = FallbackBank::builtin();
        let a = bank
            .synthesize(ComplimentType::Object, SpecificityLevel::Medium, &mut rng())
            .unwrap();
        let b = bank
            .synthesize(ComplimentType::Object, SpecificityLevel::Medium, &mut rng())
            .unwrap();
        assert_eq!(a, b);
    }
}
