use serde::{Deserialize, Serialize};

/// Chooses between the singular and plural form of a message for a count.
///
/// Only two forms are distinguished: the message itself and its `.plural`
/// attribute. Languages with richer plural categories can still select on
/// the `$count` argument inside the Fluent pattern.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PluralRule {
    /// `1` is singular, everything else is plural.
    #[default]
    OneOther,
    /// `0` and `1` are singular, everything else is plural.
    ZeroOne,
    /// Every count uses the singular form.
    Single,
}

impl PluralRule {
    pub fn is_singular(self, count: i64) -> bool {
        match self {
            PluralRule::OneOther => count == 1,
            PluralRule::ZeroOne => count == 0 || count == 1,
            PluralRule::Single => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(PluralRule::OneOther, 0, false)]
    #[case(PluralRule::OneOther, 1, true)]
    #[case(PluralRule::OneOther, 2, false)]
    #[case(PluralRule::OneOther, -1, false)]
    #[case(PluralRule::ZeroOne, 0, true)]
    #[case(PluralRule::ZeroOne, 1, true)]
    #[case(PluralRule::ZeroOne, 5, false)]
    #[case(PluralRule::Single, 1, true)]
    #[case(PluralRule::Single, 42, true)]
    fn selects_form(#[case] rule: PluralRule, #[case] count: i64, #[case] singular: bool) {
        assert_eq!(rule.is_singular(count), singular);
    }

    #[test]
    fn default_is_one_other() {
        assert_eq!(PluralRule::default(), PluralRule::OneOther);
    }
}
