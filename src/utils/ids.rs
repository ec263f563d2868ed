use chrono::{Datelike, Utc};
use rand::Rng;

use crate::modules::students::model::Programme;

/// Prefix carried by every staff verification code.
pub const VERIFICATION_CODE_PREFIX: &str = "MRT";

fn random_upper_alphanumeric(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..36u8);
            if idx < 10 {
                (b'0' + idx) as char
            } else {
                (b'A' + (idx - 10)) as char
            }
        })
        .collect()
}

/// Staff onboarding code, e.g. `MRTX7K2P`.
pub fn generate_verification_code() -> String {
    format!(
        "{}{}",
        VERIFICATION_CODE_PREFIX,
        random_upper_alphanumeric(5)
    )
}

/// Matriculation number, e.g. `MCAS/SCI/25/4QZ/O`. The segments are the
/// college code, the first three letters of the department, the two-digit
/// year, a random discriminator and the programme initial.
pub fn generate_student_id(department: &str, programme: &Programme) -> String {
    let dept: String = department.chars().take(3).collect::<String>().to_uppercase();
    let year = Utc::now().year() % 100;
    let suffix = match programme {
        Programme::OLevel => 'O',
        Programme::ALevel => 'A',
    };

    format!(
        "MCAS/{}/{:02}/{}/{}",
        dept,
        year,
        random_upper_alphanumeric(3),
        suffix
    )
}

/// Staff identifier, e.g. `STF_1736949123456_A7C2QX`.
pub fn generate_staff_id() -> String {
    format!(
        "STF_{}_{}",
        Utc::now().timestamp_millis(),
        random_upper_alphanumeric(6)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_upper_alphanumeric(s: &str) {
        assert!(
            s.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()),
            "unexpected character in {}",
            s
        );
    }

    #[test]
    fn verification_code_shape() {
        let code = generate_verification_code();
        assert_eq!(code.len(), 8);
        assert!(code.starts_with("MRT"));
        assert_upper_alphanumeric(&code);
    }

    #[test]
    fn verification_codes_vary() {
        let codes: Vec<String> = (0..16).map(|_| generate_verification_code()).collect();
        let first = &codes[0];
        assert!(codes.iter().any(|c| c != first));
    }

    #[test]
    fn student_id_shape() {
        let id = generate_student_id("Science", &Programme::OLevel);
        let parts: Vec<&str> = id.split('/').collect();

        assert_eq!(parts.len(), 5);
        assert_eq!(parts[0], "MCAS");
        assert_eq!(parts[1], "SCI");
        assert_eq!(parts[2].len(), 2);
        assert!(parts[2].chars().all(|c| c.is_ascii_digit()));
        assert_eq!(parts[3].len(), 3);
        assert_upper_alphanumeric(parts[3]);
        assert_eq!(parts[4], "O");
    }

    #[test]
    fn student_id_programme_suffix() {
        let id = generate_student_id("Science", &Programme::ALevel);
        assert!(id.ends_with("/A"));
    }

    #[test]
    fn staff_id_shape() {
        let id = generate_staff_id();
        let parts: Vec<&str> = id.split('_').collect();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "STF");
        assert!(parts[1].chars().all(|c| c.is_ascii_digit()));
        assert_eq!(parts[2].len(), 6);
        assert_upper_alphanumeric(parts[2]);
    }
}
