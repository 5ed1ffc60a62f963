use askama::Template;

use crate::notice::Notice;

/// The sign-in screen. `email` is echoed back as typed; the password never is.
#[derive(Template, Default)]
#[template(path = "sign_in.html")]
pub struct SignInTemplate {
    pub notice: Option<Notice>,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::ValidationError;

    #[test]
    fn renders_the_stable_identifiers() {
        let html = SignInTemplate::default().render().unwrap();

        for id in [
            "id=\"sign-in-form\"",
            "id=\"email\"",
            "id=\"password\"",
            "id=\"forgot-password\"",
            "id=\"sign-in-btn\"",
            "id=\"btn-google\"",
            "id=\"btn-facebook\"",
            "id=\"signup-prompt\"",
            "id=\"label-email\"",
            "id=\"label-password\"",
            "id=\"title-hello\"",
            "id=\"title-welcome\"",
            "id=\"divider\"",
        ] {
            assert!(html.contains(id), "missing {id} in {html}");
        }

        for label in [
            "Sign In Screen",
            "Sign In Form",
            "Email Input",
            "Password Input",
            "Forgot Password",
            "Sign In",
            "Continue with Google",
            "Continue with Facebook",
            "Sign up",
        ] {
            let attribute = format!("aria-label=\"{label}\"");
            assert!(html.contains(&attribute), "missing {attribute}");
        }

        assert!(html.contains("Hello,"));
        assert!(html.contains("Welcome Back!"));
        assert!(html.contains("Or Sign in With"));
        assert!(!html.contains("role=\"alert\""));
    }

    #[test]
    fn placeholder_controls_submit_the_sign_in_form() {
        let html = SignInTemplate::default().render().unwrap();

        for action in ["/forgot-password", "/social/google", "/social/facebook"] {
            let attribute = format!("form=\"sign-in-form\" formaction=\"{action}\"");
            assert!(html.contains(&attribute), "missing {attribute}");
        }
    }

    #[test]
    fn renders_the_notice_as_an_alert() {
        let html = SignInTemplate {
            notice: Some(Notice::Invalid(ValidationError::MissingEmail)),
            email: String::new(),
        }
        .render()
        .unwrap();

        assert!(html.contains("role=\"alert\""));
        assert!(html.contains("notice-advisory"));
        assert!(html.contains("Please enter your email."));
    }

    #[test]
    fn escapes_the_echoed_email() {
        let html = SignInTemplate {
            notice: None,
            email: "\"><script>".to_string(),
        }
        .render()
        .unwrap();

        assert!(!html.contains("<script>"));
    }
}
