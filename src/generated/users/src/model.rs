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

//! This namespace contains endpoints and data types for user management.

use wkt::tagged_union;

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct GetAccountArg {
    /// A user's account identifier.
    pub account_id: String,
}

impl GetAccountArg {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [account_id][GetAccountArg::account_id].
    pub fn set_account_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.account_id = v.into();
        self
    }
}

tagged_union! {
    pub enum GetAccountError {
        /// The specified [account_id][GetAccountArg::account_id] does not
        /// exist.
        "no_account" => NoAccount,
        "other" => Other,
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct GetAccountBatchArg {
    /// List of user account identifiers. Should not contain any duplicate
    /// account IDs.
    pub account_ids: Vec<String>,
}

impl GetAccountBatchArg {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [account_ids][GetAccountBatchArg::account_ids].
    pub fn set_account_ids<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        use std::iter::Iterator;
        self.account_ids = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

tagged_union! {
    pub enum GetAccountBatchError {
        /// The value is an account ID specified in
        /// [account_ids][GetAccountBatchArg::account_ids] that does not exist.
        "no_account" => NoAccount(nested String),
        "other" => Other,
    }
}

/// Representations for a person's name to assist with internationalization.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Name {
    /// Also known as a first name.
    pub given_name: String,

    /// Also known as a last name or family name.
    pub surname: String,

    /// Locale-dependent name. In the US, a person's familiar name is their
    /// `given_name`, but elsewhere, it could be any combination of a person's
    /// `given_name` and `surname`.
    pub familiar_name: String,

    /// A name that can be used directly to represent the name of a user's
    /// Dropbox account.
    pub display_name: String,

    /// An abbreviated form of the person's name. Their initials in most
    /// locales.
    pub abbreviated_name: String,
}

impl Name {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [given_name][Name::given_name].
    pub fn set_given_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.given_name = v.into();
        self
    }

    /// Sets the value of [surname][Name::surname].
    pub fn set_surname<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.surname = v.into();
        self
    }

    /// Sets the value of [familiar_name][Name::familiar_name].
    pub fn set_familiar_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.familiar_name = v.into();
        self
    }

    /// Sets the value of [display_name][Name::display_name].
    pub fn set_display_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.display_name = v.into();
        self
    }

    /// Sets the value of [abbreviated_name][Name::abbreviated_name].
    pub fn set_abbreviated_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.abbreviated_name = v.into();
        self
    }
}

/// Basic information about any account.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct BasicAccount {
    /// The user's unique Dropbox ID.
    pub account_id: String,

    /// Details of a user's name.
    pub name: Name,

    /// The user's email address. Do not rely on this without checking the
    /// [email_verified][Self::email_verified] field. Even then, it's possible
    /// that the user has since lost access to their email.
    pub email: String,

    /// Whether the user has verified their email address.
    pub email_verified: bool,

    /// URL for the photo representing the user, if one is set.
    pub profile_photo_url: std::option::Option<String>,

    /// Whether the user has been disabled.
    pub disabled: bool,

    /// Whether this user is a teammate of the current user. If this account is
    /// the current user's account, then this will be `true`.
    pub is_teammate: bool,

    /// The user's unique team member id. This field will only be present if the
    /// user is part of a team and [is_teammate][Self::is_teammate] is `true`.
    pub team_member_id: std::option::Option<String>,
}

impl BasicAccount {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [account_id][BasicAccount::account_id].
    pub fn set_account_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.account_id = v.into();
        self
    }

    /// Sets the value of [name][BasicAccount::name].
    pub fn set_name<T: std::convert::Into<Name>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [email][BasicAccount::email].
    pub fn set_email<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.email = v.into();
        self
    }

    /// Sets the value of [email_verified][BasicAccount::email_verified].
    pub fn set_email_verified<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.email_verified = v.into();
        self
    }

    /// Sets the value of [profile_photo_url][BasicAccount::profile_photo_url].
    pub fn set_profile_photo_url<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.profile_photo_url = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [profile_photo_url][BasicAccount::profile_photo_url].
    pub fn set_or_clear_profile_photo_url<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.profile_photo_url = v.map(|x| x.into());
        self
    }

    /// Sets the value of [disabled][BasicAccount::disabled].
    pub fn set_disabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.disabled = v.into();
        self
    }

    /// Sets the value of [is_teammate][BasicAccount::is_teammate].
    pub fn set_is_teammate<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_teammate = v.into();
        self
    }

    /// Sets the value of [team_member_id][BasicAccount::team_member_id].
    pub fn set_team_member_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.team_member_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [team_member_id][BasicAccount::team_member_id].
    pub fn set_or_clear_team_member_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.team_member_id = v.map(|x| x.into());
        self
    }
}

tagged_union! {
    /// What type of account this user has.
    pub enum AccountType {
        /// The basic account type.
        "basic" => Basic,
        /// The Dropbox Pro account type.
        "pro" => Pro,
        /// The Dropbox Business account type.
        "business" => Business,
    }
}

/// Information about a team.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Team {
    /// The team's unique ID.
    pub id: String,

    /// The name of the team.
    pub name: String,
}

impl Team {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][Team::id].
    pub fn set_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [name][Team::name].
    pub fn set_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// Detailed information about the current user's account.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct FullAccount {
    /// The user's unique Dropbox ID.
    pub account_id: String,

    /// Details of a user's name.
    pub name: Name,

    /// The user's email address. Do not rely on this without checking the
    /// [email_verified][Self::email_verified] field. Even then, it's possible
    /// that the user has since lost access to their email.
    pub email: String,

    /// Whether the user has verified their email address.
    pub email_verified: bool,

    /// URL for the photo representing the user, if one is set.
    pub profile_photo_url: std::option::Option<String>,

    /// Whether the user has been disabled.
    pub disabled: bool,

    /// The user's two-letter country code, if available. Country codes are
    /// based on ISO 3166-1.
    pub country: std::option::Option<String>,

    /// The language that the user specified. Locale tags will be IETF language
    /// tags.
    pub locale: String,

    /// The user's referral link.
    pub referral_link: String,

    /// If this account is a member of a team, information about that team.
    pub team: std::option::Option<Team>,

    /// This account's unique team member id. This field will only be present if
    /// [team][Self::team] is present.
    pub team_member_id: std::option::Option<String>,

    /// Whether the user has a personal and work account. If the current account
    /// is personal, then [team][Self::team] will always be `None`, but
    /// `is_paired` will indicate if a work account is linked.
    pub is_paired: bool,

    /// What type of account this user has.
    pub account_type: AccountType,

    /// The root info for this account.
    pub root_info: wkt::common::RootInfo,
}

impl FullAccount {
    pub fn new(account_type: AccountType, root_info: wkt::common::RootInfo) -> Self {
        Self {
            account_id: std::default::Default::default(),
            name: std::default::Default::default(),
            email: std::default::Default::default(),
            email_verified: std::default::Default::default(),
            profile_photo_url: std::default::Default::default(),
            disabled: std::default::Default::default(),
            country: std::default::Default::default(),
            locale: std::default::Default::default(),
            referral_link: std::default::Default::default(),
            team: std::default::Default::default(),
            team_member_id: std::default::Default::default(),
            is_paired: std::default::Default::default(),
            account_type,
            root_info,
        }
    }

    /// Sets the value of [account_id][FullAccount::account_id].
    pub fn set_account_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.account_id = v.into();
        self
    }

    /// Sets the value of [name][FullAccount::name].
    pub fn set_name<T: std::convert::Into<Name>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [email][FullAccount::email].
    pub fn set_email<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.email = v.into();
        self
    }

    /// Sets the value of [email_verified][FullAccount::email_verified].
    pub fn set_email_verified<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.email_verified = v.into();
        self
    }

    /// Sets the value of [profile_photo_url][FullAccount::profile_photo_url].
    pub fn set_profile_photo_url<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.profile_photo_url = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [profile_photo_url][FullAccount::profile_photo_url].
    pub fn set_or_clear_profile_photo_url<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.profile_photo_url = v.map(|x| x.into());
        self
    }

    /// Sets the value of [disabled][FullAccount::disabled].
    pub fn set_disabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.disabled = v.into();
        self
    }

    /// Sets the value of [country][FullAccount::country].
    pub fn set_country<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.country = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [country][FullAccount::country].
    pub fn set_or_clear_country<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.country = v.map(|x| x.into());
        self
    }

    /// Sets the value of [locale][FullAccount::locale].
    pub fn set_locale<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.locale = v.into();
        self
    }

    /// Sets the value of [referral_link][FullAccount::referral_link].
    pub fn set_referral_link<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.referral_link = v.into();
        self
    }

    /// Sets the value of [team][FullAccount::team].
    pub fn set_team<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<Team>,
    {
        self.team = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [team][FullAccount::team].
    pub fn set_or_clear_team<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<Team>,
    {
        self.team = v.map(|x| x.into());
        self
    }

    /// Sets the value of [team_member_id][FullAccount::team_member_id].
    pub fn set_team_member_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.team_member_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [team_member_id][FullAccount::team_member_id].
    pub fn set_or_clear_team_member_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.team_member_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [is_paired][FullAccount::is_paired].
    pub fn set_is_paired<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_paired = v.into();
        self
    }

    /// Sets the value of [account_type][FullAccount::account_type].
    pub fn set_account_type<T: std::convert::Into<AccountType>>(mut self, v: T) -> Self {
        self.account_type = v.into();
        self
    }

    /// Sets the value of [root_info][FullAccount::root_info].
    pub fn set_root_info<T: std::convert::Into<wkt::common::RootInfo>>(mut self, v: T) -> Self {
        self.root_info = v.into();
        self
    }
}

/// Information about a user's space usage and quota.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct SpaceUsage {
    /// The user's total space usage (bytes).
    pub used: u64,

    /// The user's space allocation.
    pub allocation: SpaceAllocation,
}

impl SpaceUsage {
    pub fn new(allocation: SpaceAllocation) -> Self {
        Self {
            used: std::default::Default::default(),
            allocation,
        }
    }

    /// Sets the value of [used][SpaceUsage::used].
    pub fn set_used<T: std::convert::Into<u64>>(mut self, v: T) -> Self {
        self.used = v.into();
        self
    }

    /// Sets the value of [allocation][SpaceUsage::allocation].
    pub fn set_allocation<T: std::convert::Into<SpaceAllocation>>(mut self, v: T) -> Self {
        self.allocation = v.into();
        self
    }
}

tagged_union! {
    /// Space is allocated differently based on the type of account.
    pub enum SpaceAllocation {
        /// The user's space allocation applies only to their individual
        /// account.
        "individual" => Individual(flat IndividualSpaceAllocation),
        /// The user shares space with other members of their team.
        "team" => Team(flat TeamSpaceAllocation),
        "other" => Other,
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct IndividualSpaceAllocation {
    /// The total space allocated to the user's account (bytes).
    pub allocated: u64,
}

impl IndividualSpaceAllocation {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [allocated][IndividualSpaceAllocation::allocated].
    pub fn set_allocated<T: std::convert::Into<u64>>(mut self, v: T) -> Self {
        self.allocated = v.into();
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct TeamSpaceAllocation {
    /// The total space currently used by the user's team (bytes).
    pub used: u64,

    /// The total space allocated to the user's team (bytes).
    pub allocated: u64,

    /// The total space allocated to the user within its team allocated space (0
    /// means that no restriction is imposed on the user's quota within its
    /// team).
    pub user_within_team_space_allocated: u64,

    /// The type of the space limit imposed on the team member (off, alert_only,
    /// stop_sync).
    pub user_within_team_space_limit_type: MemberSpaceLimitType,

    /// An accurate cached calculation of a team member's total space usage
    /// (bytes).
    pub user_within_team_space_used_cached: u64,
}

impl TeamSpaceAllocation {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [used][TeamSpaceAllocation::used].
    pub fn set_used<T: std::convert::Into<u64>>(mut self, v: T) -> Self {
        self.used = v.into();
        self
    }

    /// Sets the value of [allocated][TeamSpaceAllocation::allocated].
    pub fn set_allocated<T: std::convert::Into<u64>>(mut self, v: T) -> Self {
        self.allocated = v.into();
        self
    }

    /// Sets the value of [user_within_team_space_allocated][TeamSpaceAllocation::user_within_team_space_allocated].
    pub fn set_user_within_team_space_allocated<T: std::convert::Into<u64>>(
        mut self,
        v: T,
    ) -> Self {
        self.user_within_team_space_allocated = v.into();
        self
    }

    /// Sets the value of [user_within_team_space_limit_type][TeamSpaceAllocation::user_within_team_space_limit_type].
    pub fn set_user_within_team_space_limit_type<T: std::convert::Into<MemberSpaceLimitType>>(
        mut self,
        v: T,
    ) -> Self {
        self.user_within_team_space_limit_type = v.into();
        self
    }

    /// Sets the value of [user_within_team_space_used_cached][TeamSpaceAllocation::user_within_team_space_used_cached].
    pub fn set_user_within_team_space_used_cached<T: std::convert::Into<u64>>(
        mut self,
        v: T,
    ) -> Self {
        self.user_within_team_space_used_cached = v.into();
        self
    }
}

tagged_union! {
    #[derive(Default)]
    pub enum MemberSpaceLimitType {
        /// The team member does not have imposed space limit.
        #[default]
        "off" => Off,
        /// The team member has soft imposed space limit - the limit is used for
        /// display and for notifications.
        "alert_only" => AlertOnly,
        /// The team member has hard imposed space limit - Dropbox file sync
        /// will stop after the limit is reached.
        "stop_sync" => StopSync,
        "other" => Other,
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct UserFeaturesGetValuesBatchArg {
    /// A list of features in [UserFeature]. If the list is empty, this route
    /// will return [UserFeaturesGetValuesBatchError::EmptyFeaturesList].
    pub features: Vec<UserFeature>,
}

impl UserFeaturesGetValuesBatchArg {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [features][UserFeaturesGetValuesBatchArg::features].
    pub fn set_features<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<UserFeature>,
    {
        use std::iter::Iterator;
        self.features = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct UserFeaturesGetValuesBatchResult {
    pub values: Vec<UserFeatureValue>,
}

impl UserFeaturesGetValuesBatchResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [values][UserFeaturesGetValuesBatchResult::values].
    pub fn set_values<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<UserFeatureValue>,
    {
        use std::iter::Iterator;
        self.values = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

tagged_union! {
    pub enum UserFeaturesGetValuesBatchError {
        /// At least one [UserFeature] must be included in the
        /// [UserFeaturesGetValuesBatchArg].features list.
        "empty_features_list" => EmptyFeaturesList,
        "other" => Other,
    }
}

tagged_union! {
    /// A set of features that a Dropbox User account may have configured.
    pub enum UserFeature {
        /// This feature contains information about how the user's Paper files
        /// are stored.
        "paper_as_files" => PaperAsFiles,
        /// This feature allows users to lock files in order to restrict other
        /// users from editing them.
        "file_locking" => FileLocking,
        "other" => Other,
    }
}

tagged_union! {
    /// Values that correspond to entries in [UserFeature].
    pub enum UserFeatureValue {
        "paper_as_files" => PaperAsFiles(nested PaperAsFilesValue),
        "file_locking" => FileLocking(nested FileLockingValue),
        "other" => Other,
    }
}

tagged_union! {
    /// The value for [UserFeature::PaperAsFiles].
    pub enum PaperAsFilesValue {
        /// When this value is `true`, the user's Paper docs are accessible in
        /// Dropbox with the .paper extension and must be accessed via the
        /// /files endpoints. When this value is `false`, the user's Paper docs
        /// are stored separate from Dropbox files and folders and should be
        /// accessed via the /paper endpoints.
        "enabled" => Enabled(nested bool),
        "other" => Other,
    }
}

tagged_union! {
    /// The value for [UserFeature::FileLocking].
    pub enum FileLockingValue {
        /// When this value is `true`, the user can lock files in shared
        /// directories. When the value is `false` the user can unlock the files
        /// they have locked or request to unlock files locked by others.
        "enabled" => Enabled(nested bool),
        "other" => Other,
    }
}
