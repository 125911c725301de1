use super::icon::render_icon;
use crate::imports::*;

/// Declares one component per icon, each taking the same props as [`Icon`]
/// minus the icon itself.
macro_rules! named_icons {
	($($(#[doc = $doc:tt])* $name:ident => $icon:ident),* $(,)?) => {
		$(
			$(#[doc = $doc])*
			#[component]
			pub fn $name(
				/// Size token or size in pixels. Defaults to the `md` token
				#[prop(into, optional)]
				size: IconSize,
				/// Stroke color. Defaults to the theme's default text color
				#[prop(into, optional)]
				color: Option<String>,
				/// Any other attributes, passed through to the `<svg>` element
				#[prop(attrs)]
				attributes: Vec<(&'static str, Attribute)>,
			) -> impl IntoView {
				render_icon(IconType::$icon, size, color, String::new(), attributes)
			}
		)*
	};
}

named_icons! {
	/// Draws the [`IconType::Activity`] icon.
	IconActivity => Activity,
	/// Draws the [`IconType::AlertCircle`] icon.
	IconAlertCircle => AlertCircle,
	/// Draws the [`IconType::AlertTriangle`] icon.
	IconAlertTriangle => AlertTriangle,
	/// Draws the [`IconType::ArrowDown`] icon.
	IconArrowDown => ArrowDown,
	/// Draws the [`IconType::ArrowLeft`] icon.
	IconArrowLeft => ArrowLeft,
	/// Draws the [`IconType::ArrowRight`] icon.
	IconArrowRight => ArrowRight,
	/// Draws the [`IconType::ArrowUp`] icon.
	IconArrowUp => ArrowUp,
	/// Draws the [`IconType::CheckCircle`] icon.
	IconCheckCircle => CheckCircle,
	/// Draws the [`IconType::Check`] icon.
	IconCheck => Check,
	/// Draws the [`IconType::ChevronDown`] icon.
	IconChevronDown => ChevronDown,
	/// Draws the [`IconType::ChevronLeft`] icon.
	IconChevronLeft => ChevronLeft,
	/// Draws the [`IconType::ChevronRight`] icon.
	IconChevronRight => ChevronRight,
	/// Draws the [`IconType::ChevronUp`] icon.
	IconChevronUp => ChevronUp,
	/// Draws the [`IconType::Circle`] icon.
	IconCircle => Circle,
	/// Draws the [`IconType::Clock`] icon.
	IconClock => Clock,
	/// Draws the [`IconType::Copy`] icon.
	IconCopy => Copy,
	/// Draws the [`IconType::Database`] icon.
	IconDatabase => Database,
	/// Draws the [`IconType::Download`] icon.
	IconDownload => Download,
	/// Draws the [`IconType::Edit2`] icon.
	IconEdit2 => Edit2,
	/// Draws the [`IconType::ExternalLink`] icon.
	IconExternalLink => ExternalLink,
	/// Draws the [`IconType::Eye`] icon.
	IconEye => Eye,
	/// Draws the [`IconType::File`] icon.
	IconFile => File,
	/// Draws the [`IconType::Folder`] icon.
	IconFolder => Folder,
	/// Draws the [`IconType::HelpCircle`] icon.
	IconHelpCircle => HelpCircle,
	/// Draws the [`IconType::Home`] icon.
	IconHome => Home,
	/// Draws the [`IconType::Info`] icon.
	IconInfo => Info,
	/// Draws the [`IconType::Lock`] icon.
	IconLock => Lock,
	/// Draws the [`IconType::Menu`] icon.
	IconMenu => Menu,
	/// Draws the [`IconType::Minus`] icon.
	IconMinus => Minus,
	/// Draws the [`IconType::MoreHorizontal`] icon.
	IconMoreHorizontal => MoreHorizontal,
	/// Draws the [`IconType::Plus`] icon.
	IconPlus => Plus,
	/// Draws the [`IconType::Search`] icon.
	IconSearch => Search,
	/// Draws the [`IconType::Server`] icon.
	IconServer => Server,
	/// Draws the [`IconType::Star`] icon.
	IconStar => Star,
	/// Draws the [`IconType::Trash2`] icon.
	IconTrash2 => Trash2,
	/// Draws the [`IconType::Upload`] icon.
	IconUpload => Upload,
	/// Draws the [`IconType::User`] icon.
	IconUser => User,
	/// Draws the [`IconType::XCircle`] icon.
	IconXCircle => XCircle,
	/// Draws the [`IconType::X`] icon.
	IconX => X,
	/// Draws the [`IconType::Zap`] icon.
	IconZap => Zap,
}

#[cfg(test)]
mod test {
	use strum::IntoEnumIterator;

	use super::*;

	fn is_component<P, V: IntoView>(_: fn(P) -> V) {}

	#[test]
	fn every_glyph_has_a_named_component() {
		is_component(IconActivity);
		is_component(IconDatabase);
		is_component(IconInfo);
		is_component(IconX);
		is_component(IconZap);
		assert_eq!(IconType::iter().count(), 40);
	}
}
