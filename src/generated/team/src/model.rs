// Copyright 2026 Dropbox SDK for Rust Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! This namespace contains endpoints and data types for team management.

use wkt::tagged_union;

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct TeamGetInfoResult {
    /// The name of the team.
    pub name: String,

    /// The ID of the team.
    pub team_id: String,

    /// The number of licenses available to the team.
    pub num_licensed_users: u32,

    /// The number of accounts that have been invited or are already active
    /// members of the team.
    pub num_provisioned_users: u32,

    /// The number of licenses used on the team.
    pub num_used_licenses: u32,
}

impl TeamGetInfoResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][TeamGetInfoResult::name].
    pub fn set_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [team_id][TeamGetInfoResult::team_id].
    pub fn set_team_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.team_id = v.into();
        self
    }

    /// Sets the value of [num_licensed_users][TeamGetInfoResult::num_licensed_users].
    pub fn set_num_licensed_users<T: std::convert::Into<u32>>(mut self, v: T) -> Self {
        self.num_licensed_users = v.into();
        self
    }

    /// Sets the value of [num_provisioned_users][TeamGetInfoResult::num_provisioned_users].
    pub fn set_num_provisioned_users<T: std::convert::Into<u32>>(mut self, v: T) -> Self {
        self.num_provisioned_users = v.into();
        self
    }

    /// Sets the value of [num_used_licenses][TeamGetInfoResult::num_used_licenses].
    pub fn set_num_used_licenses<T: std::convert::Into<u32>>(mut self, v: T) -> Self {
        self.num_used_licenses = v.into();
        self
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct MembersListArg {
    /// Number of results to return per call.
    pub limit: u32,

    /// Whether to return removed members.
    pub include_removed: bool,
}

impl std::default::Default for MembersListArg {
    fn default() -> Self {
        Self {
            limit: members_list_arg_limit(),
            include_removed: std::default::Default::default(),
        }
    }
}

impl MembersListArg {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [limit][MembersListArg::limit].
    pub fn set_limit<T: std::convert::Into<u32>>(mut self, v: T) -> Self {
        self.limit = v.into();
        self
    }

    /// Sets the value of [include_removed][MembersListArg::include_removed].
    pub fn set_include_removed<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.include_removed = v.into();
        self
    }
}

fn members_list_arg_limit() -> u32 {
    1000
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct MembersListResult {
    /// List of team members.
    pub members: Vec<TeamMemberInfo>,

    /// Pass the cursor into
    /// [members_list_continue][crate::client::Team::members_list_continue] to
    /// obtain the additional members.
    pub cursor: String,

    /// Is true if there are additional team members that have not been returned
    /// yet. An additional call to
    /// [members_list_continue][crate::client::Team::members_list_continue] can
    /// retrieve them.
    pub has_more: bool,
}

impl MembersListResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [members][MembersListResult::members].
    pub fn set_members<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<TeamMemberInfo>,
    {
        use std::iter::Iterator;
        self.members = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [cursor][MembersListResult::cursor].
    pub fn set_cursor<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.cursor = v.into();
        self
    }

    /// Sets the value of [has_more][MembersListResult::has_more].
    pub fn set_has_more<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.has_more = v.into();
        self
    }
}

tagged_union! {
    pub enum MembersListError {
        "other" => Other,
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct MembersListContinueArg {
    /// Indicates from what point to get the next set of members.
    pub cursor: String,
}

impl MembersListContinueArg {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [cursor][MembersListContinueArg::cursor].
    pub fn set_cursor<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.cursor = v.into();
        self
    }
}

tagged_union! {
    pub enum MembersListContinueError {
        /// The cursor is invalid.
        "invalid_cursor" => InvalidCursor,
        "other" => Other,
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct MembersGetInfoArgs {
    /// List of team members.
    pub members: Vec<UserSelectorArg>,
}

impl MembersGetInfoArgs {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [members][MembersGetInfoArgs::members].
    pub fn set_members<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<UserSelectorArg>,
    {
        use std::iter::Iterator;
        self.members = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

tagged_union! {
    /// Argument for selecting a single user, either by team_member_id,
    /// external_id or email.
    pub enum UserSelectorArg {
        "team_member_id" => TeamMemberId(nested String),
        "external_id" => ExternalId(nested String),
        "email" => Email(nested String),
    }
}

tagged_union! {
    /// Describes a result obtained for a single user whose id was specified in
    /// the parameter of
    /// [members_get_info][crate::client::Team::members_get_info].
    pub enum MembersGetInfoItem {
        /// An ID that was provided as a parameter to
        /// [members_get_info][crate::client::Team::members_get_info], and did
        /// not match a corresponding user. This might be a team_member_id, an
        /// email, or an external ID, depending on how the method was called.
        "id_not_found" => IdNotFound(nested String),
        /// Info about a team member.
        "member_info" => MemberInfo(flat TeamMemberInfo),
    }
}

tagged_union! {
    pub enum MembersGetInfoError {
        "other" => Other,
    }
}

/// Information about a team member.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct TeamMemberInfo {
    /// Profile of a user as a member of a team.
    pub profile: TeamMemberProfile,

    /// The user's role in the team.
    pub role: AdminTier,
}

impl TeamMemberInfo {
    pub fn new(profile: TeamMemberProfile, role: AdminTier) -> Self {
        Self {
            profile,
            role,
        }
    }

    /// Sets the value of [profile][TeamMemberInfo::profile].
    pub fn set_profile<T: std::convert::Into<TeamMemberProfile>>(mut self, v: T) -> Self {
        self.profile = v.into();
        self
    }

    /// Sets the value of [role][TeamMemberInfo::role].
    pub fn set_role<T: std::convert::Into<AdminTier>>(mut self, v: T) -> Self {
        self.role = v.into();
        self
    }
}

/// Profile of a user as a member of a team.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct TeamMemberProfile {
    /// ID of user as a member of a team.
    pub team_member_id: String,

    /// External ID that a team can attach to the user. An application using the
    /// API may find it easier to use their own IDs instead of Dropbox IDs like
    /// account_id or team_member_id.
    pub external_id: std::option::Option<String>,

    /// A user's account identifier.
    pub account_id: std::option::Option<String>,

    /// Email address of user.
    pub email: String,

    /// Is true if the user's email is verified to be owned by the user.
    pub email_verified: bool,

    /// The user's status as a member of a specific team.
    pub status: TeamMemberStatus,

    /// Representations for a person's name.
    pub name: dropbox_sdk_users::model::Name,

    /// The user's membership type: full (normal team member) vs limited (does
    /// not use a license; no access to the team's shared quota).
    pub membership_type: TeamMembershipType,

    /// The date and time the user joined as a member of a specific team.
    pub joined_on: std::option::Option<wkt::Timestamp>,

    /// Persistent ID that a team can attach to the user. The persistent ID is
    /// unique ID to be used for SAML authentication.
    pub persistent_id: std::option::Option<String>,
}

impl TeamMemberProfile {
    pub fn new(status: TeamMemberStatus, membership_type: TeamMembershipType) -> Self {
        Self {
            team_member_id: std::default::Default::default(),
            external_id: std::default::Default::default(),
            account_id: std::default::Default::default(),
            email: std::default::Default::default(),
            email_verified: std::default::Default::default(),
            status,
            name: std::default::Default::default(),
            membership_type,
            joined_on: std::default::Default::default(),
            persistent_id: std::default::Default::default(),
        }
    }

    /// Sets the value of [team_member_id][TeamMemberProfile::team_member_id].
    pub fn set_team_member_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.team_member_id = v.into();
        self
    }

    /// Sets the value of [external_id][TeamMemberProfile::external_id].
    pub fn set_external_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.external_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [external_id][TeamMemberProfile::external_id].
    pub fn set_or_clear_external_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.external_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [account_id][TeamMemberProfile::account_id].
    pub fn set_account_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.account_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [account_id][TeamMemberProfile::account_id].
    pub fn set_or_clear_account_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.account_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [email][TeamMemberProfile::email].
    pub fn set_email<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.email = v.into();
        self
    }

    /// Sets the value of [email_verified][TeamMemberProfile::email_verified].
    pub fn set_email_verified<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.email_verified = v.into();
        self
    }

    /// Sets the value of [status][TeamMemberProfile::status].
    pub fn set_status<T: std::convert::Into<TeamMemberStatus>>(mut self, v: T) -> Self {
        self.status = v.into();
        self
    }

    /// Sets the value of [name][TeamMemberProfile::name].
    pub fn set_name<T: std::convert::Into<dropbox_sdk_users::model::Name>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [membership_type][TeamMemberProfile::membership_type].
    pub fn set_membership_type<T: std::convert::Into<TeamMembershipType>>(mut self, v: T) -> Self {
        self.membership_type = v.into();
        self
    }

    /// Sets the value of [joined_on][TeamMemberProfile::joined_on].
    pub fn set_joined_on<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.joined_on = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [joined_on][TeamMemberProfile::joined_on].
    pub fn set_or_clear_joined_on<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.joined_on = v.map(|x| x.into());
        self
    }

    /// Sets the value of [persistent_id][TeamMemberProfile::persistent_id].
    pub fn set_persistent_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.persistent_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [persistent_id][TeamMemberProfile::persistent_id].
    pub fn set_or_clear_persistent_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.persistent_id = v.map(|x| x.into());
        self
    }
}

tagged_union! {
    /// The user's status as a member of a specific team.
    pub enum TeamMemberStatus {
        /// User has successfully joined the team.
        "active" => Active,
        /// User has been invited to a team, but has not joined the team yet.
        "invited" => Invited,
        /// User is no longer a member of the team, but the account can be
        /// un-suspended, re-establishing the user as a team member.
        "suspended" => Suspended,
        /// User is no longer a member of the team. Removed users are only
        /// listed when include_removed is true in members/list.
        "removed" => Removed(flat RemovedStatus),
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct RemovedStatus {
    /// True if the removed team member is recoverable.
    pub is_recoverable: bool,

    /// True if the team member's account was converted to individual account.
    pub is_disconnected: bool,
}

impl RemovedStatus {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [is_recoverable][RemovedStatus::is_recoverable].
    pub fn set_is_recoverable<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_recoverable = v.into();
        self
    }

    /// Sets the value of [is_disconnected][RemovedStatus::is_disconnected].
    pub fn set_is_disconnected<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_disconnected = v.into();
        self
    }
}

tagged_union! {
    pub enum TeamMembershipType {
        /// User uses a license and has full access to team resources like the
        /// shared quota.
        "full" => Full,
        /// User does not have access to the shared quota and team admins have
        /// restricted administrative control.
        "limited" => Limited,
    }
}

tagged_union! {
    /// Describes which team-related admin permissions a user has.
    #[derive(Default)]
    pub enum AdminTier {
        /// User is an administrator of the team - has all permissions.
        "team_admin" => TeamAdmin,
        /// User can do most user provisioning, de-provisioning and management.
        "user_management_admin" => UserManagementAdmin,
        /// User can do a limited set of common support tasks for existing
        /// users.
        "support_admin" => SupportAdmin,
        /// User is not an admin of the team.
        #[default]
        "member_only" => MemberOnly,
    }
}
