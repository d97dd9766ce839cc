//! Stylesheets compiled into the binary. Used when no styles directory is configured.

pub const PROFESSIONAL_CSS: &str = r#"
body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; max-width: 850px; margin: 0 auto; padding: 40px; line-height: 1.6; color: #333; }
header { border-bottom: 3px solid #2c3e50; padding-bottom: 20px; margin-bottom: 30px; }
h1 { margin: 0 0 10px 0; color: #2c3e50; font-size: 2.2em; }
h2 { color: #34495e; border-bottom: 2px solid #ecf0f1; padding-bottom: 8px; margin-top: 25px; font-size: 1.3em; }
.contact { color: #7f8c8d; font-size: 0.95em; }
.contact a { color: #3498db; text-decoration: none; }
section { margin-bottom: 25px; }
ul { padding-left: 20px; margin: 10px 0; }
li { margin-bottom: 8px; }
.job-title { font-weight: 600; color: #2c3e50; }
.company { color: #7f8c8d; }
.date { color: #95a5a6; font-size: 0.9em; }
@media print { body { padding: 20px; } }
"#;

pub const MODERN_CSS: &str = r#"
body { font-family: 'Inter', 'Helvetica Neue', Arial, sans-serif; max-width: 820px; margin: 0 auto; padding: 48px 40px; color: #1f2933; line-height: 1.55; }
header { display: flex; flex-direction: column; gap: 6px; margin-bottom: 28px; }
h1 { margin: 0; font-size: 2.4em; font-weight: 700; letter-spacing: -0.02em; color: #0b7285; }
h2 { margin-top: 28px; font-size: 1.05em; text-transform: uppercase; letter-spacing: 0.12em; color: #0b7285; }
.contact { font-size: 0.9em; color: #52606d; }
.contact a { color: #0b7285; text-decoration: none; }
section { margin-bottom: 22px; }
ul { padding-left: 18px; margin: 8px 0; }
li { margin-bottom: 6px; }
.job-title { font-weight: 600; }
.company { color: #52606d; }
.date { float: right; color: #7b8794; font-size: 0.85em; }
@media print { body { padding: 16px; } h1, h2 { color: #000; } }
"#;

pub const CLASSIC_CSS: &str = r#"
body { font-family: Georgia, 'Times New Roman', serif; max-width: 800px; margin: 0 auto; padding: 40px; color: #000; line-height: 1.5; }
header { text-align: center; margin-bottom: 24px; }
h1 { margin: 0 0 6px 0; font-size: 2em; font-variant: small-caps; }
h2 { font-size: 1.15em; border-bottom: 1px solid #000; padding-bottom: 4px; margin-top: 22px; font-variant: small-caps; }
.contact { font-size: 0.95em; }
.contact a { color: #000; }
section { margin-bottom: 20px; }
ul { padding-left: 22px; margin: 8px 0; }
li { margin-bottom: 5px; }
.job-title { font-style: italic; }
.date { float: right; }
@media print { body { padding: 0; } }
"#;
