//! Group aggregate invariant errors.

use fairsplit_shared::MemberId;
use thiserror::Error;

/// Errors that can occur mutating a group aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupError {
    /// Group name is empty or blank.
    #[error("Group name cannot be empty")]
    EmptyName,

    /// Member is already part of the group.
    #[error("Member {0} already exists in group")]
    DuplicateMember(MemberId),

    /// Member is not part of the group.
    #[error("Member {0} not found in group")]
    MemberNotFound(MemberId),

    /// Member is payer or split participant of an existing expense.
    #[error("Cannot remove member {0} with associated expenses")]
    MemberHasActivity(MemberId),

    /// Expense payer or split participant is not a group member.
    #[error("Member {0} on the expense is not a member of the group")]
    NonMemberParticipant(MemberId),
}

impl GroupError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyName => "EMPTY_NAME",
            Self::DuplicateMember(_) => "DUPLICATE_MEMBER",
            Self::MemberNotFound(_) => "MEMBER_NOT_FOUND",
            Self::MemberHasActivity(_) => "MEMBER_HAS_ACTIVITY",
            Self::NonMemberParticipant(_) => "NON_MEMBER_PARTICIPANT",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::MemberNotFound(_) => 404,
            Self::EmptyName
            | Self::DuplicateMember(_)
            | Self::MemberHasActivity(_)
            | Self::NonMemberParticipant(_) => 400,
        }
    }
}
