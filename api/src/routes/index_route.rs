//! GET / — minimal upload & ask page.

use axum::response::Html;

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Celebrity QA</title>
  <style>
    body { font-family: sans-serif; max-width: 40rem; margin: 2rem auto; }
    fieldset { margin-bottom: 1.5rem; }
  </style>
</head>
<body>
  <h1>Celebrity QA</h1>
  <fieldset>
    <legend>1. Upload a photo</legend>
    <form action="/upload" method="post" enctype="multipart/form-data">
      <input type="file" name="image" accept="image/*" required>
      <button type="submit">Upload</button>
    </form>
  </fieldset>
  <fieldset>
    <legend>2. Ask about the celebrity</legend>
    <form id="ask">
      <input name="name" placeholder="Celebrity name" required>
      <input name="question" placeholder="Your question" required>
      <button type="submit">Ask</button>
    </form>
    <p id="answer"></p>
  </fieldset>
  <script>
    document.getElementById('ask').addEventListener('submit', async (ev) => {
      ev.preventDefault();
      const form = new FormData(ev.target);
      const resp = await fetch('/ask', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ name: form.get('name'), question: form.get('question') }),
      });
      const body = await resp.json();
      document.getElementById('answer').textContent = body.answer ?? body.message;
    });
  </script>
</body>
</html>
"#;
