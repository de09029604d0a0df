//! Static command catalog for the workflow help menu

/// One line of the help menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A titled group of commands.
#[derive(Debug, Clone, Copy)]
pub struct HelpCategory {
    pub title: &'static str,
    pub commands: &'static [CommandInfo],
}

const fn cmd(name: &'static str, description: &'static str) -> CommandInfo {
    CommandInfo { name, description }
}

pub static WORKFLOW_CATEGORIES: &[HelpCategory] = &[
    HelpCategory {
        title: "GETTING STARTED",
        commands: &[
            cmd("create", "Create a new function from template"),
            cmd("run", "Run function locally for development"),
            cmd("invoke", "Test function with sample data"),
        ],
    },
    HelpCategory {
        title: "DEPLOYMENT",
        commands: &[
            cmd("build", "Build function container image"),
            cmd("deploy", "Deploy function to Kubernetes cluster"),
            cmd("delete", "Remove function from cluster"),
        ],
    },
    HelpCategory {
        title: "MANAGEMENT",
        commands: &[
            cmd("list", "List deployed functions"),
            cmd("describe", "Show detailed function information"),
            cmd("logs", "View function execution logs"),
        ],
    },
    HelpCategory {
        title: "CONFIGURATION",
        commands: &[
            cmd("config", "Manage function configuration"),
            cmd("subscribe", "Configure event subscriptions"),
        ],
    },
    HelpCategory {
        title: "UTILITY COMMANDS",
        commands: &[
            cmd("languages", "List supported runtimes"),
            cmd("templates", "List available templates"),
            cmd("version", "Show version information"),
        ],
    },
];

/// Every command name across all categories, in menu order.
pub fn command_names() -> impl Iterator<Item = &'static str> {
    WORKFLOW_CATEGORIES
        .iter()
        .flat_map(|category| category.commands.iter().map(|c| c.name))
}
