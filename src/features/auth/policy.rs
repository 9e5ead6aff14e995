//! Password rules shared by every screen that sets a password. Admin and user
//! accounts use different presets of the same parameterized policy; the
//! strength meter is simply the number of satisfied rules.

use crate::features::forms::FieldErrors;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub require_upper: bool,
    pub require_lower: bool,
    pub require_digit: bool,
    pub require_special: bool,
}

impl PasswordPolicy {
    /// Admin accounts: 10 characters plus all four character classes.
    pub const ADMIN: Self = Self {
        min_length: 10,
        require_upper: true,
        require_lower: true,
        require_digit: true,
        require_special: true,
    };

    /// Site users: 8 characters, no special-character rule.
    pub const USER: Self = Self {
        min_length: 8,
        require_upper: true,
        require_lower: true,
        require_digit: true,
        require_special: false,
    };

    /// Active rules in display order. Length is always checked.
    pub fn rules(&self) -> Vec<PasswordRule> {
        let mut rules = vec![PasswordRule::MinLength(self.min_length)];
        if self.require_upper {
            rules.push(PasswordRule::Uppercase);
        }
        if self.require_lower {
            rules.push(PasswordRule::Lowercase);
        }
        if self.require_digit {
            rules.push(PasswordRule::Digit);
        }
        if self.require_special {
            rules.push(PasswordRule::Special);
        }
        rules
    }

    pub fn evaluate(&self, password: &str) -> PasswordReport {
        let checks = self
            .rules()
            .into_iter()
            .map(|rule| (rule, rule.is_satisfied(password)))
            .collect();
        PasswordReport { checks }
    }

    /// Validates a new password and its confirmation for submission.
    pub fn check_new_password(&self, password: &str, confirm: &str) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if password.is_empty() {
            errors.insert("password", "Password is required");
        } else if !self.evaluate(password).is_acceptable() {
            errors.insert("password", "Password does not meet all requirements");
        }

        if confirm.is_empty() {
            errors.insert("confirm_password", "Confirm your new password");
        } else if password != confirm {
            errors.insert("confirm_password", "Passwords do not match");
        }

        errors.into_result(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordRule {
    MinLength(usize),
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl PasswordRule {
    pub fn is_satisfied(self, password: &str) -> bool {
        match self {
            PasswordRule::MinLength(min) => password.chars().count() >= min,
            PasswordRule::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            PasswordRule::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            PasswordRule::Digit => password.chars().any(|c| c.is_ascii_digit()),
            PasswordRule::Special => password
                .chars()
                .any(|c| !c.is_ascii_alphanumeric() && !c.is_whitespace()),
        }
    }

    pub fn description(self) -> String {
        match self {
            PasswordRule::MinLength(min) => format!("At least {min} characters"),
            PasswordRule::Uppercase => "One uppercase letter".to_string(),
            PasswordRule::Lowercase => "One lowercase letter".to_string(),
            PasswordRule::Digit => "One number".to_string(),
            PasswordRule::Special => "One special character".to_string(),
        }
    }
}

/// Labels in ascending order; a policy with `n` rules uses the first `n`.
const STRENGTH_LABELS: [Strength; 5] = [
    Strength::VeryWeak,
    Strength::Weak,
    Strength::Fair,
    Strength::Good,
    Strength::Strong,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
}

impl Strength {
    pub fn label(self) -> &'static str {
        match self {
            Strength::VeryWeak => "Very Weak",
            Strength::Weak => "Weak",
            Strength::Fair => "Fair",
            Strength::Good => "Good",
            Strength::Strong => "Strong",
        }
    }

    /// Tailwind color for the meter bar.
    pub fn bar_class(self) -> &'static str {
        match self {
            Strength::VeryWeak => "bg-red-500",
            Strength::Weak => "bg-orange-500",
            Strength::Fair => "bg-yellow-400",
            Strength::Good => "bg-lime-500",
            Strength::Strong => "bg-emerald-600",
        }
    }
}

/// Per-rule outcome for one password.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PasswordReport {
    checks: Vec<(PasswordRule, bool)>,
}

impl PasswordReport {
    pub fn checks(&self) -> &[(PasswordRule, bool)] {
        &self.checks
    }

    pub fn score(&self) -> usize {
        self.checks.iter().filter(|(_, ok)| *ok).count()
    }

    pub fn total(&self) -> usize {
        self.checks.len()
    }

    pub fn is_acceptable(&self) -> bool {
        self.score() == self.total()
    }

    /// Strength on the policy's own scale; an empty score is "Very Weak".
    pub fn strength(&self) -> Strength {
        let scale = &STRENGTH_LABELS[..self.total().min(STRENGTH_LABELS.len())];
        let index = self.score().saturating_sub(1).min(scale.len().saturating_sub(1));
        scale.get(index).copied().unwrap_or(Strength::VeryWeak)
    }

    /// Meter fill in percent.
    pub fn percent(&self) -> usize {
        if self.total() == 0 {
            0
        } else {
            self.score() * 100 / self.total()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PasswordPolicy, PasswordRule, Strength};

    #[test]
    fn presets_have_expected_cardinality() {
        assert_eq!(PasswordPolicy::ADMIN.rules().len(), 5);
        assert_eq!(PasswordPolicy::USER.rules().len(), 4);
        assert!(!PasswordPolicy::USER.rules().contains(&PasswordRule::Special));
    }

    #[test]
    fn score_grows_with_each_satisfied_rule() {
        let policy = PasswordPolicy::ADMIN;
        let steps = ["", "a", "aB", "aB3", "aB3!", "aB3!aB3!aB"];
        let scores: Vec<usize> = steps.iter().map(|p| policy.evaluate(p).score()).collect();
        assert_eq!(scores, vec![0, 1, 2, 3, 4, 5]);
        for report in steps.iter().map(|p| policy.evaluate(p)) {
            assert_eq!(report.total(), 5);
        }
    }

    #[test]
    fn admin_scale_tops_out_at_strong() {
        let policy = PasswordPolicy::ADMIN;
        assert_eq!(policy.evaluate("").strength(), Strength::VeryWeak);
        assert_eq!(policy.evaluate("a").strength(), Strength::VeryWeak);
        assert_eq!(policy.evaluate("aB").strength(), Strength::Weak);
        assert_eq!(policy.evaluate("aB3!").strength(), Strength::Good);
        assert_eq!(policy.evaluate("Sh1vam!Test").strength(), Strength::Strong);
    }

    #[test]
    fn user_scale_tops_out_at_good() {
        let policy = PasswordPolicy::USER;
        let report = policy.evaluate("Passw0rd");
        assert_eq!(report.score(), 4);
        assert!(report.is_acceptable());
        assert_eq!(report.strength(), Strength::Good);
        assert_eq!(report.percent(), 100);
    }

    #[test]
    fn special_rule_ignores_whitespace() {
        assert!(!PasswordRule::Special.is_satisfied("abc def"));
        assert!(PasswordRule::Special.is_satisfied("abc_def"));
    }

    #[test]
    fn special_rule_counts_non_ascii_letters() {
        assert!(PasswordRule::Special.is_satisfied("Straße1"));
        assert!(PasswordRule::Special.is_satisfied("café"));
        assert!(!PasswordRule::Special.is_satisfied("Cafe1"));
    }

    #[test]
    fn check_new_password_requires_match() {
        let errors = PasswordPolicy::ADMIN.check_new_password("Sh1vam!Test", "Sh1vam!Tesx");
        assert_eq!(
            errors.err().and_then(|e| e.get("confirm_password").map(str::to_string)),
            Some("Passwords do not match".to_string())
        );
        assert!(PasswordPolicy::ADMIN.check_new_password("Sh1vam!Test", "Sh1vam!Test").is_ok());
    }

    #[test]
    fn check_new_password_rejects_weak_admin_password() {
        let result = PasswordPolicy::ADMIN.check_new_password("Passw0rd", "Passw0rd");
        assert!(result.is_err_and(|errors| errors.get("password").is_some()));
        assert!(PasswordPolicy::USER.check_new_password("Passw0rd", "Passw0rd").is_ok());
    }
}
