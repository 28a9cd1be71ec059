//! Gate in front of pages that need a signed-in user.

use crate::api::SessionUser;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Loading,
    Authenticated(SessionUser),
    Unauthenticated,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateAction {
    ShowLoading,
    Render,
    RedirectToSignIn,
}

impl SessionStatus {
    /// What a protected page should do for this session state.
    pub fn gate(&self) -> GateAction {
        match self {
            Self::Loading => GateAction::ShowLoading,
            Self::Authenticated(_) => GateAction::Render,
            Self::Unauthenticated => GateAction::RedirectToSignIn,
        }
    }

    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}
