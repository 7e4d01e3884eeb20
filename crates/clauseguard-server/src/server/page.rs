//! Single-page upload and review UI

pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>ClauseGuard - Contract Review</title>
    <style>
        body { font-family: sans-serif; max-width: 60rem; margin: 2rem auto; padding: 0 1rem; line-height: 1.6; }
        textarea { width: 100%; height: 250px; font-family: monospace; }
        button { padding: 0.5rem 1.2rem; font-size: 1rem; cursor: pointer; }
        .hidden { display: none; }
        .error { color: #b00020; font-weight: bold; }
        .annotation { padding: 0.1rem 0.3rem; margin: 0 0.1rem; border-radius: 0.3rem; color: #111; }
        .annotation .label { font-size: 0.7rem; opacity: 0.7; margin-left: 0.4rem; text-transform: uppercase; }
        .review { border-bottom: 1px solid #ddd; padding: 0.5rem 0; }
    </style>
</head>
<body>
    <h1>Contract Review with Highlights &amp; Suggestions</h1>

    <label for="file">Upload a contract (PDF, DOCX, or TXT)</label>
    <input type="file" id="file" accept=".pdf,.docx,.txt">
    <p id="error" class="error hidden"></p>

    <section id="original" class="hidden">
        <h2>📄 Original Contract</h2>
        <textarea id="contract" readonly></textarea>
        <p><button id="review-btn">🔍 Review Contract</button></p>
    </section>

    <section id="results" class="hidden">
        <h2>✅ Reviewed Contract with Highlights</h2>
        <p id="summary"></p>
        <div id="highlighted"></div>

        <h2>📋 Detailed Review &amp; Suggestions</h2>
        <div id="reviews"></div>
    </section>

    <script>
        const fileInput = document.getElementById('file');
        const errorBox = document.getElementById('error');
        const contract = document.getElementById('contract');

        function showError(message) {
            errorBox.textContent = message;
            errorBox.classList.remove('hidden');
        }

        async function postJson(response) {
            const raw = await response.text();
            let body;
            try {
                body = JSON.parse(raw);
            } catch (_) {
                throw new Error(raw || response.statusText);
            }
            if (!response.ok) {
                throw new Error(body.error || response.statusText);
            }
            return body;
        }

        fileInput.addEventListener('change', async () => {
            errorBox.classList.add('hidden');
            document.getElementById('results').classList.add('hidden');
            if (!fileInput.files.length) return;

            const form = new FormData();
            form.append('file', fileInput.files[0]);
            try {
                const doc = await postJson(await fetch('/api/extract', { method: 'POST', body: form }));
                contract.value = doc.text;
                document.getElementById('original').classList.remove('hidden');
            } catch (e) {
                showError(e.message);
            }
        });

        document.getElementById('review-btn').addEventListener('click', async () => {
            errorBox.classList.add('hidden');
            try {
                const report = await postJson(await fetch('/api/review', {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify({ text: contract.value }),
                }));
                renderReport(report);
            } catch (e) {
                showError(e.message);
            }
        });

        function renderReport(report) {
            const highlighted = document.getElementById('highlighted');
            highlighted.replaceChildren();
            let high = 0, medium = 0;
            for (const span of report.spans) {
                const el = document.createElement('span');
                el.className = 'annotation';
                el.style.backgroundColor = span.color;
                el.textContent = span.text;
                const label = document.createElement('span');
                label.className = 'label';
                label.textContent = span.label;
                el.appendChild(label);
                highlighted.appendChild(el);
                if (span.label === 'High Risk') high++;
                if (span.label === 'Medium Risk') medium++;
            }
            document.getElementById('summary').textContent =
                `${report.spans.length} clauses: ${high} high risk, ${medium} medium risk`;

            const reviews = document.getElementById('reviews');
            reviews.replaceChildren();
            report.reviews.forEach((review, idx) => {
                const entry = document.createElement('div');
                entry.className = 'review';
                const lines = [
                    [`Clause ${idx + 1}: `, review.clause],
                    ['⚠️ Issue: ', review.issue],
                    ['💡 Suggestion: ', review.suggestion],
                    ['🛑 Risk Level: ', review.risk],
                ];
                for (const [title, value] of lines) {
                    const p = document.createElement('p');
                    const strong = document.createElement('strong');
                    strong.textContent = title;
                    p.appendChild(strong);
                    p.appendChild(document.createTextNode(value));
                    entry.appendChild(p);
                }
                reviews.appendChild(entry);
            });

            document.getElementById('results').classList.remove('hidden');
        }
    </script>
</body>
</html>
"#;
