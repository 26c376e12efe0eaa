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

//! Client configuration and per request options.
//!
//! While the client library defaults are intended to work for most
//! applications, it is sometimes necessary to change the configuration.
//! Notably the default endpoint, and the default authentication credentials
//! do not work for some applications.
//!
//! Likewise, applications may need to customize the behavior of some calls
//! made via a client, even a customized one. Applications sometimes change
//! the timeout for an specific call, or act on behalf of a different team
//! member. The `*Builder` returned by each client method implements the
//! [RequestOptionsBuilder] trait where applications can override some
//! defaults.

use wkt::common::PathRoot;

/// A set of options configuring a single request.
///
/// Application only use this class directly in mocks, where they may want to
/// verify their application has configured all the right request parameters
/// and options.
///
/// All other code uses this type indirectly, via the per-request builders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
    user_agent: Option<String>,
    attempt_timeout: Option<std::time::Duration>,
    select_user: Option<String>,
    select_admin: Option<String>,
    path_root: Option<PathRoot>,
}

impl RequestOptions {
    /// Prepends this prefix to the user agent header value.
    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    /// Gets the current user-agent prefix
    pub fn user_agent(&self) -> &Option<String> {
        &self.user_agent
    }

    /// Sets the timeout for the request.
    ///
    /// The requests are never retried, this is the total time allowed for
    /// the request, including reading the response headers.
    pub fn set_attempt_timeout<T: Into<std::time::Duration>>(&mut self, v: T) {
        self.attempt_timeout = Some(v.into());
    }

    /// Gets the current timeout.
    pub fn attempt_timeout(&self) -> &Option<std::time::Duration> {
        &self.attempt_timeout
    }

    /// Acts on behalf of this team member.
    pub fn set_select_user<T: Into<String>>(&mut self, v: T) {
        self.select_user = Some(v.into());
    }

    /// Gets the team member selected for this request, if any.
    pub fn select_user(&self) -> &Option<String> {
        &self.select_user
    }

    /// Acts on behalf of this team admin.
    pub fn set_select_admin<T: Into<String>>(&mut self, v: T) {
        self.select_admin = Some(v.into());
    }

    /// Gets the team admin selected for this request, if any.
    pub fn select_admin(&self) -> &Option<String> {
        &self.select_admin
    }

    /// Resolves paths in this request relative to a different namespace.
    pub fn set_path_root<T: Into<PathRoot>>(&mut self, v: T) {
        self.path_root = Some(v.into());
    }

    /// Gets the path root for this request, if any.
    pub fn path_root(&self) -> &Option<PathRoot> {
        &self.path_root
    }
}

/// Implementations of this trait provide setters to configure request options.
///
/// The Dropbox SDK for Rust provides a builder for each route. These builders
/// can be used to set the route argument, e.g., the path of the file targeted
/// by the route, as well as any options affecting the request, such as
/// timeouts or the team member to act on behalf of.
pub trait RequestOptionsBuilder: internal::RequestBuilder {
    /// Set the user agent header.
    fn with_user_agent<V: Into<String>>(self, v: V) -> Self;

    /// Sets the timeout for this request.
    fn with_attempt_timeout<V: Into<std::time::Duration>>(self, v: V) -> Self;

    /// Acts on behalf of a team member for this request.
    fn with_select_user<V: Into<String>>(self, v: V) -> Self;

    /// Acts on behalf of a team admin for this request.
    fn with_select_admin<V: Into<String>>(self, v: V) -> Self;

    /// Resolves paths relative to a different namespace for this request.
    fn with_path_root<V: Into<PathRoot>>(self, v: V) -> Self;
}

#[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
pub mod internal {
    //! This module contains implementation details. It is not part of the
    //! public API. Types and functions in this module may be changed or removed
    //! without warnings. Applications should not use any types contained
    //! within.
    use super::RequestOptions;
    use wkt::common::PathRoot;

    /// Simplify implementation of the [super::RequestOptionsBuilder] trait in
    /// generated code.
    ///
    /// This is an implementation detail, most applications have little need to
    /// worry about or use this trait.
    pub trait RequestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions;
    }

    /// Fills any option not set in `options` from the client defaults.
    pub fn set_defaults(
        mut options: RequestOptions,
        user_agent: Option<&String>,
        select_user: Option<&String>,
        select_admin: Option<&String>,
        path_root: Option<&PathRoot>,
    ) -> RequestOptions {
        if options.user_agent.is_none() {
            options.user_agent = user_agent.cloned();
        }
        if options.select_user.is_none() {
            options.select_user = select_user.cloned();
        }
        if options.select_admin.is_none() {
            options.select_admin = select_admin.cloned();
        }
        if options.path_root.is_none() {
            options.path_root = path_root.cloned();
        }
        options
    }
}

/// Implements the sealed [RequestOptionsBuilder] trait.
impl<T> RequestOptionsBuilder for T
where
    T: internal::RequestBuilder,
{
    fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_user_agent(v);
        self
    }

    fn with_attempt_timeout<V: Into<std::time::Duration>>(mut self, v: V) -> Self {
        self.request_options().set_attempt_timeout(v);
        self
    }

    fn with_select_user<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_select_user(v);
        self
    }

    fn with_select_admin<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_select_admin(v);
        self
    }

    fn with_path_root<V: Into<PathRoot>>(mut self, v: V) -> Self {
        self.request_options().set_path_root(v);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::internal::*;
    use super::*;
    use std::time::Duration;

    #[derive(Debug, Default)]
    struct TestBuilder {
        request_options: RequestOptions,
    }
    impl RequestBuilder for TestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.request_options
        }
    }

    #[test]
    fn request_options() {
        let mut opts = RequestOptions::default();
        assert_eq!(opts.user_agent(), &None);
        assert_eq!(opts.attempt_timeout(), &None);
        assert_eq!(opts.select_user(), &None);
        assert_eq!(opts.select_admin(), &None);
        assert_eq!(opts.path_root(), &None);

        opts.set_user_agent("test-only");
        assert_eq!(opts.user_agent().as_deref(), Some("test-only"));

        let d = Duration::from_secs(123);
        opts.set_attempt_timeout(d);
        assert_eq!(opts.user_agent().as_deref(), Some("test-only"));
        assert_eq!(opts.attempt_timeout(), &Some(d));

        opts.set_select_user("dbmid:user");
        assert_eq!(opts.select_user().as_deref(), Some("dbmid:user"));
        opts.set_select_admin("dbmid:admin");
        assert_eq!(opts.select_admin().as_deref(), Some("dbmid:admin"));
        opts.set_path_root(PathRoot::Home);
        assert_eq!(opts.path_root(), &Some(PathRoot::Home));
    }

    #[test]
    fn request_options_defaults() {
        let client_agent = "client-agent".to_string();
        let client_user = "dbmid:client".to_string();
        let client_root = PathRoot::Root("123".to_string());

        let opts = set_defaults(
            RequestOptions::default(),
            Some(&client_agent),
            Some(&client_user),
            None,
            Some(&client_root),
        );
        assert_eq!(opts.user_agent().as_deref(), Some("client-agent"));
        assert_eq!(opts.select_user().as_deref(), Some("dbmid:client"));
        assert_eq!(opts.select_admin(), &None);
        assert_eq!(opts.path_root(), &Some(client_root.clone()));

        let mut opts = RequestOptions::default();
        opts.set_user_agent("request-agent");
        opts.set_select_user("dbmid:request");
        opts.set_path_root(PathRoot::Home);
        let opts = set_defaults(
            opts,
            Some(&client_agent),
            Some(&client_user),
            None,
            Some(&client_root),
        );
        assert_eq!(opts.user_agent().as_deref(), Some("request-agent"));
        assert_eq!(opts.select_user().as_deref(), Some("dbmid:request"));
        assert_eq!(opts.path_root(), &Some(PathRoot::Home));
    }

    #[test]
    fn request_options_builder() {
        let builder = TestBuilder::default();
        assert_eq!(builder.request_options, RequestOptions::default());

        let mut builder = TestBuilder::default()
            .with_user_agent("test-only")
            .with_attempt_timeout(Duration::from_secs(10))
            .with_select_user("dbmid:user")
            .with_select_admin("dbmid:admin")
            .with_path_root(PathRoot::NamespaceId("42".to_string()));
        let opts = builder.request_options();
        assert_eq!(opts.user_agent().as_deref(), Some("test-only"));
        assert_eq!(opts.attempt_timeout(), &Some(Duration::from_secs(10)));
        assert_eq!(opts.select_user().as_deref(), Some("dbmid:user"));
        assert_eq!(opts.select_admin().as_deref(), Some("dbmid:admin"));
        assert_eq!(
            opts.path_root(),
            &Some(PathRoot::NamespaceId("42".to_string()))
        );
    }
}
