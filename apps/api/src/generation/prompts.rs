// Embedded prompt templates, one pair (system + body) per DocumentKind.
// Bodies use `{resume_yaml}` and, for job-tailored kinds, `{job_description}`.
// A PROMPTS_DIR deployment overrides these with files of the same shape.

/// System prompt for the plain resume.
pub const RESUME_SYSTEM: &str = "You are an expert resume writer and front-end developer. \
    You turn structured resume data into a clean, ATS-friendly resume expressed as semantic HTML.";

/// Resume prompt. Replace `{resume_yaml}` before sending.
pub const RESUME_PROMPT_TEMPLATE: &str = r#"Write a complete resume from the resume data below.

Return a single <body> element with this structure:
<body>
  <header>
    <h1>Full name</h1>
    <div class="contact-info">
      <p class="fas fa-map-marker-alt"><span>City, Country</span></p>
      <p class="fas fa-phone"><span>+1 555 0100</span></p>
      <p class="fas fa-envelope"><span>name@example.com</span></p>
      <p class="fab fa-linkedin"><a href="...">LinkedIn</a></p>
      <p class="fab fa-github"><a href="...">GitHub</a></p>
    </div>
  </header>
  <main>
    <section id="education">...</section>
    <section id="work-experience">...</section>
    <section id="side-projects">...</section>
    <section id="achievements">...</section>
    <section id="certifications">...</section>
    <section id="skills-languages">...</section>
  </main>
</body>

RULES:
1. One <section> per resume section that is present in the data, each with an <h2> heading
2. Each job is an <div class="entry"> with <span class="entry-title">, <span class="entry-year">,
   <span class="entry-location"> and a <ul class="compact-list"> of responsibilities
3. Write responsibilities as concise achievement statements starting with a strong verb
4. Contact items that are missing from the data are omitted, never left blank

RESUME DATA (YAML):
{resume_yaml}"#;

/// System prompt for the job-tailored resume.
pub const TAILORED_RESUME_SYSTEM: &str = "You are an expert resume writer and recruiter. \
    You tailor a candidate's resume to a specific job description while staying strictly factual, \
    and you express the result as semantic HTML.";

/// Tailored resume prompt. Replace `{resume_yaml}` and `{job_description}` before sending.
pub const TAILORED_RESUME_PROMPT_TEMPLATE: &str = r#"Write a resume for the candidate below, tailored to the job description.

TAILORING RULES:
1. Reorder sections and entries so the most relevant experience for this role comes first
2. Emphasize responsibilities and skills that match the job description's requirements
3. Mirror the job description's terminology where the candidate's data genuinely supports it
4. Never add a skill or achievement that is not in the resume data

Return a single <body> element containing a <header> (name in <h1>, contact details in
<div class="contact-info">) followed by a <main> with one <section> and <h2> per present section.

JOB DESCRIPTION:
{job_description}

RESUME DATA (YAML):
{resume_yaml}"#;

/// System prompt for the cover letter.
pub const COVER_LETTER_SYSTEM: &str = "You are an expert career coach who writes concise, \
    specific cover letters. You write in a professional but warm first-person voice.";

/// Cover letter prompt. Replace `{resume_yaml}` and `{job_description}` before sending.
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Write a cover letter from the candidate below for the job described.

STRUCTURE:
- A greeting addressed to the hiring team
- An opening paragraph naming the role and why the candidate is interested
- One or two paragraphs connecting the candidate's most relevant experience to the job's requirements
- A closing paragraph with a call to action
- A sign-off with the candidate's full name

RULES:
1. At most four paragraphs, under 350 words
2. Each paragraph is a <p> element; the sign-off is a <p class="signature">
3. Reference concrete experience from the resume data; no generic filler
4. Do not restate the resume line by line

JOB DESCRIPTION:
{job_description}

RESUME DATA (YAML):
{resume_yaml}"#;
