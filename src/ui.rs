use crate::view::JourneyView;

pub fn render_index(view: &JourneyView) -> String {
    INDEX_HTML
        .replace("{{START}}", &view.start_date)
        .replace("{{END}}", &view.end_date)
        .replace("{{TOTAL_WEEKS}}", &view.total_weeks.to_string())
        .replace("{{WEEKS_PASSED}}", &view.weeks_passed.to_string())
        .replace("{{PROGRESS}}", &format!("{:.1}%", view.progress_percent))
        .replace("{{MAX}}", &view.amount.ceiling.to_string())
        .replace("{{VALUE}}", &view.amount.value.to_string())
        .replace("{{AMOUNT}}", &view.amount.display)
        .replace("{{AMOUNT_PERCENT}}", &format!("{:.1}%", view.amount.percentage))
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Journey Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(1100px, 100%);
      margin: 0 auto;
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 6px 0 0;
      color: #5f5c57;
    }

    .controls {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
      gap: 16px;
    }

    .control {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 10px;
    }

    .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    input[type="date"],
    input[type="number"] {
      font: inherit;
      padding: 8px 10px;
      border-radius: 10px;
      border: 1px solid rgba(47, 72, 88, 0.2);
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 16px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent-2);
      color: white;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .progress-bar {
      height: 12px;
      border-radius: 999px;
      background: rgba(47, 72, 88, 0.1);
      overflow: hidden;
    }

    .progress-fill {
      height: 100%;
      background: var(--accent);
    }

    .years {
      display: flex;
      flex-wrap: wrap;
      gap: 18px;
    }

    .year-title {
      font-weight: 600;
      margin-bottom: 8px;
    }

    .weeks-grid {
      display: grid;
      grid-template-columns: repeat(4, 14px);
      gap: 4px;
    }

    .week {
      width: 14px;
      height: 14px;
      border-radius: 3px;
      border: 1px solid rgba(47, 72, 88, 0.3);
      background: white;
      cursor: pointer;
    }

    .week.filled {
      background: var(--accent-2);
    }

    #tooltip {
      position: absolute;
      pointer-events: none;
      background: var(--ink);
      color: white;
      padding: 4px 8px;
      border-radius: 6px;
      font-size: 0.8rem;
      display: none;
    }

    #tooltip.show {
      display: block;
    }

    #notification {
      position: fixed;
      bottom: 24px;
      right: 24px;
      padding: 12px 18px;
      border-radius: 12px;
      background: #2d7a4b;
      color: white;
      opacity: 0;
      transition: opacity 200ms ease;
    }

    #notification.show {
      opacity: 1;
    }

    #notification.error {
      background: #c63b2b;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Journey Tracker</h1>
      <p class="subtitle">Every square is a week. Click one to mark it passed.</p>
    </header>

    <section class="controls">
      <div class="control">
        <span class="label">Journey dates</span>
        <input type="date" id="startDate" value="{{START}}" />
        <input type="date" id="endDate" value="{{END}}" />
        <button id="applyDates" type="button">Apply dates</button>
      </div>
      <div class="control">
        <span class="label">Maximum amount</span>
        <input type="number" id="maxAmount" min="1" value="{{MAX}}" />
        <button id="applyMaxAmount" type="button">Apply maximum</button>
      </div>
      <div class="control">
        <span class="label">Saved so far</span>
        <input type="range" id="moneySlider" min="0" max="{{MAX}}" value="{{VALUE}}" />
        <input type="number" id="customAmount" min="0" value="{{VALUE}}" />
        <button id="setAmount" type="button">Set amount</button>
      </div>
    </section>

    <section class="panel">
      <div class="stat">
        <span class="label">Total weeks</span>
        <span id="totalWeeks" class="value">{{TOTAL_WEEKS}}</span>
      </div>
      <div class="stat">
        <span class="label">Weeks passed</span>
        <span id="weeksPassed" class="value">{{WEEKS_PASSED}}</span>
      </div>
      <div class="stat">
        <span class="label">Journey progress</span>
        <span id="journeyProgress" class="value">{{PROGRESS}}</span>
      </div>
      <div class="stat">
        <span class="label">Savings</span>
        <span id="currentValue" class="value">{{AMOUNT}}</span>
        <div class="progress-bar"><div class="progress-fill" id="progressFill" style="width: {{AMOUNT_PERCENT}}"></div></div>
        <span id="progressPercent">{{AMOUNT_PERCENT}}</span>
      </div>
    </section>

    <section class="years" id="yearsContainer"></section>
  </main>

  <div id="tooltip"></div>
  <div id="notification"></div>

  <script>
    const yearsContainer = document.getElementById('yearsContainer');
    const tooltip = document.getElementById('tooltip');
    const notification = document.getElementById('notification');
    const slider = document.getElementById('moneySlider');
    const customAmount = document.getElementById('customAmount');
    const maxAmount = document.getElementById('maxAmount');

    let lastAutoFill = 0;
    let notificationTimer = null;

    const showNotification = (message, isError) => {
      notification.textContent = message;
      notification.classList.toggle('error', Boolean(isError));
      notification.classList.add('show');
      clearTimeout(notificationTimer);
      notificationTimer = setTimeout(() => notification.classList.remove('show'), 3000);
    };

    const renderAmount = (amount) => {
      slider.max = amount.ceiling;
      slider.value = amount.value;
      customAmount.value = amount.value;
      maxAmount.value = amount.ceiling;
      document.getElementById('currentValue').textContent = amount.display;
      document.getElementById('progressFill').style.width = `${amount.percentage}%`;
      document.getElementById('progressPercent').textContent = `${amount.percentage.toFixed(1)}%`;
    };

    const renderGrid = (years) => {
      yearsContainer.innerHTML = '';
      years.forEach((year) => {
        const column = document.createElement('div');
        const title = document.createElement('div');
        title.className = 'year-title';
        title.textContent = `Year ${year.number}`;
        const grid = document.createElement('div');
        grid.className = 'weeks-grid';

        year.weeks.forEach((week) => {
          const cell = document.createElement('div');
          cell.className = week.filled ? 'week filled' : 'week';
          cell.addEventListener('mouseenter', () => {
            tooltip.textContent = `${week.start_label} - ${week.end_label}`;
            tooltip.classList.add('show');
          });
          cell.addEventListener('mousemove', (event) => {
            tooltip.style.left = `${event.pageX + 10}px`;
            tooltip.style.top = `${event.pageY - 30}px`;
          });
          cell.addEventListener('mouseleave', () => tooltip.classList.remove('show'));
          cell.addEventListener('click', () => {
            send(`/api/weeks/${week.end_timestamp}/toggle`, null);
          });
          grid.appendChild(cell);
        });

        column.appendChild(title);
        column.appendChild(grid);
        yearsContainer.appendChild(column);
      });
    };

    const render = (journey) => {
      document.getElementById('startDate').value = journey.start_date;
      document.getElementById('endDate').value = journey.end_date;
      document.getElementById('totalWeeks').textContent = journey.total_weeks;
      document.getElementById('weeksPassed').textContent = journey.weeks_passed;
      document.getElementById('journeyProgress').textContent = `${journey.progress_percent.toFixed(1)}%`;
      renderAmount(journey.amount);
      renderGrid(journey.years);

      const report = journey.auto_fill;
      if (report && report.sequence > lastAutoFill) {
        showNotification(report.message);
        lastAutoFill = report.sequence;
      }
    };

    const send = async (url, body) => {
      const res = await fetch(url, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: body === null ? undefined : JSON.stringify(body)
      });
      if (!res.ok) {
        showNotification(await res.text(), true);
        return;
      }
      const data = await res.json();
      render(data.journey);
      if (data.notice) {
        showNotification(data.notice);
      }
    };

    const refresh = async () => {
      const res = await fetch('/api/journey');
      if (res.ok) {
        render(await res.json());
      }
    };

    document.getElementById('applyDates').addEventListener('click', () => {
      send('/api/dates', {
        start: document.getElementById('startDate').value,
        end: document.getElementById('endDate').value
      });
    });

    document.getElementById('applyMaxAmount').addEventListener('click', () => {
      send('/api/max-amount', { value: maxAmount.value });
    });

    document.getElementById('setAmount').addEventListener('click', () => {
      send('/api/amount', { value: customAmount.value });
    });

    slider.addEventListener('input', () => {
      customAmount.value = slider.value;
    });

    slider.addEventListener('change', () => {
      send('/api/amount', { value: slider.value });
    });

    refresh();
    setInterval(refresh, 60000);
  </script>
</body>
</html>
"#;
