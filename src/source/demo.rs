use crate::types::{FileItem, Person};

pub(super) fn people() -> Vec<Person> {
	vec![
		Person::new(
			1,
			"Caroline Dribsson",
			"Unactivated",
			"https://ix-marketing.imgix.net/focalpoint.png?auto=format,compress&w=1946",
			false,
		),
		Person::new(
			2,
			"Adam Cadribean",
			"Active 1w ago",
			"https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=40&h=40&fit=crop&crop=face",
			true,
		),
		Person::new(
			3,
			"Sarah Wilson",
			"Active 2d ago",
			"https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=40&h=40&fit=crop&crop=face",
			true,
		),
	]
}

pub(super) fn files() -> Vec<FileItem> {
	vec![
		FileItem::new(1, "final_dribbble_presentation.jpg", "Presentations", "Edited 1w ago", "image"),
		FileItem::new(2, "project_mockups.sketch", "Design Files", "Edited 2d ago", "design"),
		FileItem::new(3, "brand_guidelines.pdf", "Documents", "Edited 3d ago", "document"),
		FileItem::new(4, "client_feedback.docx", "Reviews", "Edited 5d ago", "document"),
		FileItem::new(5, "website_wireframe.fig", "Design Files", "Edited 1w ago", "design"),
		FileItem::new(6, "marketing_assets.zip", "Assets", "Edited 2w ago", "archive"),
	]
}
