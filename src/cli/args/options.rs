use clap::ValueEnum;
use omnisearch::{SourceKind, Tab};

/// Source kinds accepted via the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum KindArg {
	Files,
	People,
	Chats,
	Lists,
}

impl KindArg {
	pub(crate) fn kind(self) -> SourceKind {
		match self {
			KindArg::Files => SourceKind::Files,
			KindArg::People => SourceKind::People,
			KindArg::Chats => SourceKind::Chats,
			KindArg::Lists => SourceKind::Lists,
		}
	}
}

/// Result tabs selectable from the CLI.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum TabArg {
	All,
	Files,
	People,
	Chats,
	Lists,
}

impl TabArg {
	/// Return the tab identifier consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		self.tab().id()
	}

	pub(crate) fn tab(self) -> Tab {
		match self {
			TabArg::All => Tab::All,
			TabArg::Files => Tab::Files,
			TabArg::People => Tab::People,
			TabArg::Chats => Tab::Chats,
			TabArg::Lists => Tab::Lists,
		}
	}
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
