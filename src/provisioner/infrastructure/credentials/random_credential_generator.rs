use rand::{Rng, distributions::Alphanumeric};

use crate::provisioner::domain::services::credential_generator::CredentialGenerator;

const ROLE_SUFFIX_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const ROLE_SUFFIX_LENGTH: usize = 5;
const PASSWORD_LENGTH: usize = 15;

#[derive(Clone, Debug, Default)]
pub struct RandomCredentialGenerator;

impl CredentialGenerator for RandomCredentialGenerator {
    fn role_suffix(&self) -> String {
        let mut rng = rand::thread_rng();
        (0..ROLE_SUFFIX_LENGTH)
            .map(|_| ROLE_SUFFIX_CHARSET[rng.gen_range(0..ROLE_SUFFIX_CHARSET.len())] as char)
            .collect()
    }

    fn password(&self) -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(PASSWORD_LENGTH)
            .map(char::from)
            .collect()
    }
}
