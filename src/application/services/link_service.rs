//! Link creation and retrieval service.

use std::sync::Arc;

use url::Url;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, is_valid_code};

/// Default number of codes tried before giving up on a create request.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Service for creating and resolving short links.
///
/// Generation and storage are decoupled: the service draws a random code and
/// lets the repository's atomic insert decide whether it is free, retrying a
/// bounded number of times.
pub struct LinkService<L: LinkRepository + ?Sized = dyn LinkRepository> {
    link_repository: Arc<L>,
    max_attempts: usize,
}

impl<L: LinkRepository + ?Sized> LinkService<L> {
    /// Creates a new link service with [`DEFAULT_MAX_ATTEMPTS`].
    pub fn new(link_repository: Arc<L>) -> Self {
        Self {
            link_repository,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Overrides the number of insert attempts per create request.
    ///
    /// Values below 1 are raised to 1.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Creates a short link for `long_url`.
    ///
    /// The URL must parse as an absolute URL; reachability is not checked and the
    /// string is stored exactly as given. Submitting the same URL twice creates
    /// two independent links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if the URL does not parse.
    ///
    /// Returns [`AppError::ExhaustedRetries`] if every generated code was taken.
    pub fn shorten(&self, long_url: &str) -> Result<Link, AppError> {
        Url::parse(long_url)?;

        for attempt in 1..=self.max_attempts {
            let new_link = NewLink {
                code: generate_code(),
                long_url: long_url.to_owned(),
            };

            if let Some(link) = self.link_repository.insert(new_link) {
                return Ok(link);
            }

            tracing::warn!(attempt, "Short code collision, regenerating");
        }

        Err(AppError::ExhaustedRetries {
            attempts: self.max_attempts,
        })
    }

    /// Returns the original URL stored for `code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub fn resolve(&self, code: &str) -> Result<String, AppError> {
        if !is_valid_code(code) {
            return Err(AppError::not_found(code));
        }

        self.link_repository
            .find_by_code(code)
            .map(|link| link.long_url)
            .ok_or_else(|| AppError::not_found(code))
    }

    /// Number of stored links.
    pub fn link_count(&self) -> usize {
        self.link_repository.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use crate::infrastructure::memory::MemoryLinkRepository;
    use crate::utils::code_generator::CODE_LENGTH;
    use chrono::Utc;

    fn memory_service() -> LinkService<MemoryLinkRepository> {
        LinkService::new(Arc::new(MemoryLinkRepository::new()))
    }

    fn stored(new_link: NewLink) -> Option<Link> {
        Some(new_link.into_link(Utc::now()))
    }

    #[test]
    fn test_shorten_success() {
        let mut mock_link_repo = MockLinkRepository::new();
        mock_link_repo
            .expect_insert()
            .withf(|new_link| {
                new_link.long_url == "https://example.com/a" && is_valid_code(&new_link.code)
            })
            .times(1)
            .returning(stored);

        let service = LinkService::new(Arc::new(mock_link_repo));

        let link = service.shorten("https://example.com/a").unwrap();
        assert_eq!(link.long_url, "https://example.com/a");
        assert_eq!(link.code.len(), CODE_LENGTH);
    }

    #[test]
    fn test_shorten_invalid_url_skips_storage() {
        let mut mock_link_repo = MockLinkRepository::new();
        mock_link_repo.expect_insert().never();

        let service = LinkService::new(Arc::new(mock_link_repo));

        for input in ["::not a url::", "", "example.com/path", "http://"] {
            let result = service.shorten(input);
            assert!(
                matches!(result, Err(AppError::InvalidUrl(_))),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_shorten_retries_on_collision() {
        let mut mock_link_repo = MockLinkRepository::new();
        let mut calls = 0;
        mock_link_repo
            .expect_insert()
            .times(3)
            .returning(move |new_link| {
                calls += 1;
                if calls < 3 { None } else { stored(new_link) }
            });

        let service = LinkService::new(Arc::new(mock_link_repo));

        let link = service.shorten("https://example.com").unwrap();
        assert_eq!(link.long_url, "https://example.com");
    }

    #[test]
    fn test_shorten_exhausts_retries() {
        let mut mock_link_repo = MockLinkRepository::new();
        mock_link_repo
            .expect_insert()
            .times(DEFAULT_MAX_ATTEMPTS)
            .returning(|_| None);

        let service = LinkService::new(Arc::new(mock_link_repo));

        let result = service.shorten("https://example.com");
        assert!(matches!(
            result,
            Err(AppError::ExhaustedRetries { attempts }) if attempts == DEFAULT_MAX_ATTEMPTS
        ));
    }

    #[test]
    fn test_with_max_attempts_bounds_retries() {
        let mut mock_link_repo = MockLinkRepository::new();
        mock_link_repo.expect_insert().times(2).returning(|_| None);

        let service = LinkService::new(Arc::new(mock_link_repo)).with_max_attempts(2);

        assert!(matches!(
            service.shorten("https://example.com"),
            Err(AppError::ExhaustedRetries { attempts: 2 })
        ));
    }

    #[test]
    fn test_resolve_found() {
        let mut mock_link_repo = MockLinkRepository::new();
        mock_link_repo
            .expect_find_by_code()
            .withf(|code| code == "abcd1234")
            .times(1)
            .returning(|code| {
                Some(Link::new(
                    code.to_string(),
                    "https://example.com".to_string(),
                    Utc::now(),
                ))
            });

        let service = LinkService::new(Arc::new(mock_link_repo));

        assert_eq!(service.resolve("abcd1234").unwrap(), "https://example.com");
    }

    #[test]
    fn test_resolve_not_found() {
        let mut mock_link_repo = MockLinkRepository::new();
        mock_link_repo
            .expect_find_by_code()
            .times(1)
            .returning(|_| None);

        let service = LinkService::new(Arc::new(mock_link_repo));

        assert!(matches!(
            service.resolve("abcd1234"),
            Err(AppError::NotFound { code }) if code == "abcd1234"
        ));
    }

    #[test]
    fn test_resolve_malformed_code_skips_storage() {
        let mut mock_link_repo = MockLinkRepository::new();
        mock_link_repo.expect_find_by_code().never();

        let service = LinkService::new(Arc::new(mock_link_repo));

        for code in ["", "short", "doesnotexist", "abc-1234", "abcd123/"] {
            assert!(matches!(
                service.resolve(code),
                Err(AppError::NotFound { .. })
            ));
        }
    }

    #[test]
    fn test_round_trip() {
        let service = memory_service();

        for url in [
            "https://example.com/a",
            "http://localhost:8080/path?q=1&r=2#frag",
            "ftp://files.example.org/pub/file.txt",
            "HTTPS://EXAMPLE.COM:443/Mixed/Case",
            "mailto:someone@example.com",
        ] {
            let link = service.shorten(url).unwrap();
            assert_eq!(service.resolve(&link.code).unwrap(), url);
        }
    }

    #[test]
    fn test_same_url_yields_distinct_codes() {
        let service = memory_service();

        let first = service.shorten("https://example.com/same").unwrap();
        let second = service.shorten("https://example.com/same").unwrap();

        assert_ne!(first.code, second.code);
        assert_eq!(
            service.resolve(&first.code).unwrap(),
            "https://example.com/same"
        );
        assert_eq!(
            service.resolve(&second.code).unwrap(),
            "https://example.com/same"
        );
        assert_eq!(service.link_count(), 2);
    }

    #[test]
    fn test_resolve_unknown_code_on_empty_store() {
        let service = memory_service();

        assert!(matches!(
            service.resolve("zzzzzzzz"),
            Err(AppError::NotFound { .. })
        ));
    }
}
