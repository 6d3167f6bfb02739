//! Static help text sent in reply to `HELP`, `H`, or `?`.

/// Help reply listing every command with an example.
pub const HELP_TEXT: &str = r#"🤖 *WhatsApp Drive Assistant*

*Available Commands:*

📁 *LIST /FolderName*
   List all files in a folder
   Example: `LIST /ProjectX`

🗑️ *DELETE /FolderName/file.pdf*
   Delete a specific file
   Example: `DELETE /ProjectX/report.pdf`

📦 *MOVE /Source/file.pdf /Destination*
   Move file to different folder
   Example: `MOVE /ProjectX/report.pdf /Archive`

📋 *SUMMARY /FolderName*
   Generate AI summaries of all documents
   Example: `SUMMARY /ProjectX`

❓ *HELP* or *H*
   Show this help message

*Notes:*
• Use forward slashes (/) for paths
• Folder names are case-sensitive
• Supported documents: PDF, DOCX, Google Docs, TXT"#;
