use actix_utils::future::{ready, Ready};
use actix_web::{dev::Payload, web, Error, FromRequest, HttpRequest};
use secrecy::SecretString;

pub mod collaborator;

/// Credentials captured by a valid sign-in submission.
#[derive(Debug)]
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
}

/// External system that performs the actual sign-in.
///
/// Registered as `web::Data<dyn AuthCollaborator>`; when none is registered the
/// form falls back to a demo confirmation.
pub trait AuthCollaborator: Send + Sync {
    fn submit(&self, credentials: Credentials);
}

#[derive(Clone)]
pub enum SignInSeam {
    Demo,
    Delegated {
        collaborator: web::Data<dyn AuthCollaborator>,
    },
}

impl SignInSeam {
    pub fn collaborator(&self) -> Option<&dyn AuthCollaborator> {
        match self {
            SignInSeam::Delegated { collaborator } => Some(collaborator.get_ref()),
            SignInSeam::Demo => None,
        }
    }
}

impl FromRequest for SignInSeam {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        if let Some(collaborator) = req.app_data::<web::Data<dyn AuthCollaborator>>() {
            ready(Ok(SignInSeam::Delegated {
                collaborator: collaborator.clone(),
            }))
        } else {
            ready(Ok(SignInSeam::Demo))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use actix_web::test::TestRequest;

    use super::*;

    #[derive(Default)]
    struct Counter {
        calls: AtomicUsize,
    }

    impl AuthCollaborator for Counter {
        fn submit(&self, _credentials: Credentials) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[actix_web::test]
    async fn seam_without_collaborator_is_demo() {
        let req = TestRequest::default().to_http_request();
        let seam = SignInSeam::extract(&req).await.unwrap();

        assert!(seam.collaborator().is_none());
    }

    #[actix_web::test]
    async fn seam_with_registered_collaborator_is_delegated() {
        let counter = Arc::new(Counter::default());
        let collaborator: Arc<dyn AuthCollaborator> = counter.clone();
        let req = TestRequest::default()
            .app_data(web::Data::from(collaborator))
            .to_http_request();
        let seam = SignInSeam::extract(&req).await.unwrap();

        assert!(matches!(seam, SignInSeam::Delegated { .. }));
        seam.collaborator().unwrap().submit(Credentials {
            email: "a@b.com".to_string(),
            password: SecretString::from("secret".to_string()),
        });
        assert_eq!(counter.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn credentials_debug_does_not_leak_password() {
        let credentials = Credentials {
            email: "a@b.com".to_string(),
            password: SecretString::from("hunter2".to_string()),
        };

        assert!(!format!("{credentials:?}").contains("hunter2"));
    }
}
