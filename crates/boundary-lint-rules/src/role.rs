//! Architectural roles and strategy tags.

/// The architectural category a module is classified into.
///
/// One closed enum covers both dialects; each dialect exposes its subset
/// (the attribute dialect never produces the last three variants).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Server-only logic module.
    ServerLogic,
    /// Component rendered exclusively on the server.
    ServerComponent,
    /// Server function module, triggered from components.
    ServerFunction,
    /// Client-only logic module.
    ClientLogic,
    /// Component re-rendered in the browser.
    ClientComponent,
    /// Client component providing context (directive dialect only).
    ClientContext,
    /// Logic runnable in both environments.
    AgnosticLogic,
    /// Component renderable in both environments.
    AgnosticComponent,
    /// Component choosing a branch per environment (directive dialect only).
    AgnosticCondition,
    /// Module whose concrete role is chosen per import site
    /// (directive dialect only).
    AgnosticStrategy,
}

/// Roles available in the attribute dialect.
pub const ATTRIBUTE_ROLES: &[Role] = &[
    Role::ServerLogic,
    Role::ServerComponent,
    Role::ServerFunction,
    Role::ClientLogic,
    Role::ClientComponent,
    Role::AgnosticLogic,
    Role::AgnosticComponent,
];

/// Roles available in the directive dialect.
pub const DIRECTIVE_ROLES: &[Role] = &[
    Role::ServerLogic,
    Role::ServerComponent,
    Role::ServerFunction,
    Role::ClientLogic,
    Role::ClientComponent,
    Role::ClientContext,
    Role::AgnosticLogic,
    Role::AgnosticComponent,
    Role::AgnosticCondition,
    Role::AgnosticStrategy,
];

impl Role {
    /// Human-readable module-family name used in messages.
    #[must_use]
    pub fn module_name(self) -> &'static str {
        match self {
            Self::ServerLogic => "server logics",
            Self::ServerComponent => "server components",
            Self::ServerFunction => "server functions",
            Self::ClientLogic => "client logics",
            Self::ClientComponent => "client components",
            Self::ClientContext => "client contexts",
            Self::AgnosticLogic => "agnostic logics",
            Self::AgnosticComponent => "agnostic components",
            Self::AgnosticCondition => "agnostic conditions",
            Self::AgnosticStrategy => "agnostic strategies",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.module_name())
    }
}

/// Import-site strategy tags (directive dialect).
///
/// When the target module is marked as a strategy, the concrete role is
/// supplied by one of these tags in a comment nested inside the import
/// declaration. Each tag maps to exactly one role; the strategy role
/// itself has no tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyTag {
    /// `@serverLogics`
    ServerLogics,
    /// `@serverComponents`
    ServerComponents,
    /// `@serverFunctions`
    ServerFunctions,
    /// `@clientLogics`
    ClientLogics,
    /// `@clientComponents`
    ClientComponents,
    /// `@clientContexts`
    ClientContexts,
    /// `@agnosticLogics`
    AgnosticLogics,
    /// `@agnosticComponents`
    AgnosticComponents,
    /// `@agnosticConditions`
    AgnosticConditions,
}

impl StrategyTag {
    /// Parses a trimmed comment body into a tag.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim() {
            "@serverLogics" => Some(Self::ServerLogics),
            "@serverComponents" => Some(Self::ServerComponents),
            "@serverFunctions" => Some(Self::ServerFunctions),
            "@clientLogics" => Some(Self::ClientLogics),
            "@clientComponents" => Some(Self::ClientComponents),
            "@clientContexts" => Some(Self::ClientContexts),
            "@agnosticLogics" => Some(Self::AgnosticLogics),
            "@agnosticComponents" => Some(Self::AgnosticComponents),
            "@agnosticConditions" => Some(Self::AgnosticConditions),
            _ => None,
        }
    }

    /// The concrete role this tag selects.
    #[must_use]
    pub fn role(self) -> Role {
        match self {
            Self::ServerLogics => Role::ServerLogic,
            Self::ServerComponents => Role::ServerComponent,
            Self::ServerFunctions => Role::ServerFunction,
            Self::ClientLogics => Role::ClientLogic,
            Self::ClientComponents => Role::ClientComponent,
            Self::ClientContexts => Role::ClientContext,
            Self::AgnosticLogics => Role::AgnosticLogic,
            Self::AgnosticComponents => Role::AgnosticComponent,
            Self::AgnosticConditions => Role::AgnosticCondition,
        }
    }
}
