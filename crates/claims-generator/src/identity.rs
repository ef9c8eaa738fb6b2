//! Member names and process-unique email addresses.
//!
//! Names come from curated pools. Email uniqueness is tracked in memory for
//! the lifetime of one [`UniqueEmails`] registry, which the driver keeps for
//! the whole process run so that addresses never repeat across passes.

use crate::error::GeneratorError;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// How many tokens are tried for one name pair before giving up.
pub const MAX_EMAIL_ATTEMPTS: usize = 64;

const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen", "Christopher", "Lisa", "Daniel", "Nancy", "Matthew", "Betty", "Anthony",
    "Margaret", "Mark", "Sandra", "Donald", "Ashley", "Steven", "Kimberly", "Paul", "Emily",
    "Andrew", "Donna", "Joshua", "Michelle", "Kenneth", "Carol", "Kevin", "Amanda", "Brian",
    "Melissa", "George", "Deborah", "Timothy", "Stephanie", "Ronald", "Rebecca", "Jason", "Laura",
    "Edward", "Sharon", "Jeffrey", "Cynthia", "Ryan", "Kathleen", "Jacob", "Amy", "Gary", "Angela",
    "Nicholas", "Shirley", "Eric", "Anna", "Jonathan", "Brenda", "Stephen", "Pamela", "Larry",
    "Emma", "Justin", "Nicole", "Scott", "Helen", "Brandon", "Samantha", "Benjamin", "Katherine",
    "Samuel", "Christine", "Gregory", "Debra", "Alexander", "Rachel", "Patrick", "Carolyn",
    "Frank", "Janet", "Raymond", "Maria", "Jack", "Olivia", "Dennis", "Heather", "Jerry", "Diane",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright",
    "Scott", "Torres", "Nguyen", "Hill", "Flores", "Green", "Adams", "Nelson", "Baker", "Hall",
    "Rivera", "Campbell", "Mitchell", "Carter", "Roberts", "Gomez", "Phillips", "Evans", "Turner",
    "Diaz", "Parker", "Cruz", "Edwards", "Collins", "Reyes", "Stewart", "Morris", "Morales",
    "Murphy", "Cook", "Rogers", "Gutierrez", "Ortiz", "Morgan", "Cooper", "Peterson", "Bailey",
    "Reed", "Kelly", "Howard", "Ramos", "Kim", "Cox", "Ward", "Richardson", "Watson", "Brooks",
    "Chavez", "Wood", "James", "Bennett", "Gray", "Mendoza", "Ruiz", "Hughes", "Price", "Alvarez",
    "Castillo", "Sanders", "Patel", "Myers", "Long", "Ross", "Foster", "Jimenez",
];

const EMAIL_DOMAINS: &[&str] = &[
    "example.com",
    "example.org",
    "example.net",
    "mail.example.com",
    "inbox.example.org",
];

/// Pick a first name from the curated pool.
pub fn first_name<R: Rng>(rng: &mut R) -> &'static str {
    FIRST_NAMES.choose(rng).copied().unwrap_or("Alex")
}

/// Pick a last name from the curated pool.
pub fn last_name<R: Rng>(rng: &mut R) -> &'static str {
    LAST_NAMES.choose(rng).copied().unwrap_or("Doe")
}

fn local_part(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Registry of email addresses handed out so far.
#[derive(Debug, Default, Clone)]
pub struct UniqueEmails {
    issued: HashSet<String>,
}

impl UniqueEmails {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an unused address of the form `first.last.NNNN@domain`.
    pub fn next<R: Rng>(
        &mut self,
        rng: &mut R,
        first_name: &str,
        last_name: &str,
    ) -> Result<String, GeneratorError> {
        let first = local_part(first_name);
        let last = local_part(last_name);

        for _ in 0..MAX_EMAIL_ATTEMPTS {
            let token: u16 = rng.gen_range(0..10_000);
            let domain = EMAIL_DOMAINS.choose(rng).copied().unwrap_or("example.com");
            let email = format!("{first}.{last}.{token:04}@{domain}");
            if self.issued.insert(email.clone()) {
                return Ok(email);
            }
        }

        Err(GeneratorError::EmailSpaceExhausted {
            attempts: MAX_EMAIL_ATTEMPTS,
        })
    }

    /// Mark an address as taken, e.g. one already present in the target store.
    pub fn reserve(&mut self, email: impl Into<String>) -> bool {
        self.issued.insert(email.into())
    }

    pub fn contains(&self, email: &str) -> bool {
        self.issued.contains(email)
    }

    pub fn len(&self) -> usize {
        self.issued.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issued.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_names_come_from_pools() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            assert!(FIRST_NAMES.contains(&first_name(&mut rng)));
            assert!(LAST_NAMES.contains(&last_name(&mut rng)));
        }
    }

    #[test]
    fn test_email_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut emails = UniqueEmails::new();
        let email = emails.next(&mut rng, "Mary", "O'Brien").unwrap();

        let (local, domain) = email.split_once('@').unwrap();
        assert!(local.starts_with("mary.obrien."));
        assert_eq!(local.len(), "mary.obrien.".len() + 4);
        assert!(EMAIL_DOMAINS.contains(&domain));
        assert!(emails.contains(&email));
    }

    #[test]
    fn test_emails_unique_for_same_name() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut emails = UniqueEmails::new();
        let mut seen = HashSet::new();

        for _ in 0..5_000 {
            let email = emails.next(&mut rng, "John", "Smith").unwrap();
            assert!(seen.insert(email));
        }
        assert_eq!(emails.len(), 5_000);
    }

    #[test]
    fn test_exhausted_name_space() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut emails = UniqueEmails::new();
        for token in 0..10_000 {
            for domain in EMAIL_DOMAINS {
                emails.reserve(format!("a.b.{token:04}@{domain}"));
            }
        }

        let result = emails.next(&mut rng, "A", "B");
        assert!(matches!(
            result,
            Err(GeneratorError::EmailSpaceExhausted { attempts }) if attempts == MAX_EMAIL_ATTEMPTS
        ));
    }

    #[test]
    fn test_reserve_reports_duplicates() {
        let mut emails = UniqueEmails::new();
        assert!(emails.is_empty());
        assert!(emails.reserve("x@example.com"));
        assert!(!emails.reserve("x@example.com"));
    }
}
