//! Slide content records and the built-in OIDC beta session deck.

use serde::{Deserialize, Serialize};

/// Default output path of the built-in deck.
pub const DEFAULT_OUTPUT: &str = "OIDC_Beta_Intro.pptx";

/// Content of one title-and-bullets slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideContent {
    pub title: String,
    /// One paragraph each, in order
    pub bullets: Vec<String>,
    /// Speaker notes, written as-is
    pub notes: String,
}

impl SlideContent {
    pub fn new<I, S>(title: impl Into<String>, bullets: I, notes: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            bullets: bullets.into_iter().map(Into::into).collect(),
            notes: notes.into(),
        }
    }
}

/// Content of the opening title slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleContent {
    pub title: String,
    /// May span several lines separated by `'\n'`
    pub subtitle: String,
}

impl TitleContent {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }
}

/// Title slide of the OIDC beta session.
pub fn oidc_beta_title() -> TitleContent {
    TitleContent::new(
        "OIDC with GitHub Actions: Beta Introduction (Session 1)",
        "Presenter: Heidi Housten\nSolidify – now a part of Eficode",
    )
}

/// Content slides of the OIDC beta session, in presentation order.
pub fn oidc_beta_session() -> Vec<SlideContent> {
    vec![
        SlideContent::new(
            "Agenda",
            [
                "Part 1: The Why and What (15 min)",
                "• Static Keys Problem",
                "• OIDC Solution & GitHub’s Role",
                "Part 2: Workload Identity & Trust (20 min)",
                "• JWT Deep Dive",
                "• Cloud Federation Demos",
                "Feedback & Q&A",
            ],
            "Outline of today's beta session for developers/devops.",
        ),
        SlideContent::new(
            "The Hidden Risk: Static Credentials",
            [
                "AWS_ACCESS_KEY_ID / AZURE_SECRET",
                "Long-lived credentials; high risk if leaked",
                "Zero context on usage or origin",
            ],
            "Discuss static keys as a major CI/CD risk.",
        ),
        SlideContent::new(
            "The OIDC Difference: Short-Lived Tokens",
            [
                "OIDC builds on OAuth 2.0",
                "Tokens issued by GitHub IdP, short-lived & signed",
                "No stored secrets — fresh token per run",
            ],
            "Explain OIDC temporary tokens and verifiable identity.",
        ),
        SlideContent::new(
            "OIDC vs OAuth: Authentication vs Authorization",
            [
                "OAuth 2.0 → Authorization",
                "OIDC → Authentication",
                "CI/CD uses OIDC for identity → leads to cloud authorization",
            ],
            "Contrast the two protocols for clarity.",
        ),
        SlideContent::new(
            "The GitHub Actions Identity Provider",
            [
                "Issuer: https://token.actions.githubusercontent.com",
                "permissions: id-token: write",
                "Use cloud login actions to exchange token",
            ],
            "GitHub acts as IdP issuing the JWT to cloud providers.",
        ),
        SlideContent::new(
            "Workload Identity: Identity for Your Code",
            [
                "Human vs Machine identity",
                "Federation: trusting external IdP (GitHub)",
                "Azure Service Principal / AWS IAM Role",
            ],
            "Introduce workload identity concept.",
        ),
        SlideContent::new(
            "Demo 1: The Well-Known Endpoint",
            [
                "URL: https://token.actions.githubusercontent.com/.well-known/openid-configuration",
                "Lists claims and public keys",
                "Proves GitHub is OIDC-compliant",
            ],
            "Show OIDC discovery metadata.",
        ),
        SlideContent::new(
            "Demo 2: Inside the Identity Token",
            [
                "JWT = Header.Payload.Signature",
                "iss: GitHub | sub: repo/branch | aud: cloud service",
                "Use jwt.ms to inspect token",
            ],
            "Visualize token claims and meaning.",
        ),
        SlideContent::new(
            "Demo 3: Configuring Azure Trust",
            [
                "Entra ID App Registration (Service Principal)",
                "Federated Credential links GitHub JWT to Entra ID",
                "Subject match creates trust bridge",
            ],
            "Walk through Entra ID setup for federation.",
        ),
        SlideContent::new(
            "Feedback & Q&A",
            [
                "Your input shapes Session 2!",
                "Use Q&A or QR form for comments",
                "Thank you for participating in the beta!",
            ],
            "Invite audience feedback and wrap-up.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_table() {
        let slides = oidc_beta_session();
        assert_eq!(slides.len(), 10);
        assert_eq!(slides[0].title, "Agenda");
        assert_eq!(slides[0].bullets.len(), 7);
        assert_eq!(slides[0].bullets[2], "• OIDC Solution & GitHub’s Role");
        assert_eq!(slides[9].title, "Feedback & Q&A");
        assert!(slides.iter().all(|s| !s.notes.is_empty()));
    }

    #[test]
    fn test_title_content() {
        let title = oidc_beta_title();
        assert_eq!(title.subtitle.lines().count(), 2);
        assert!(title.subtitle.ends_with("Solidify – now a part of Eficode"));
    }
}
