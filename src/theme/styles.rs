//! Global CSS styles for the gate page.
//!
//! Full-bleed black stage, crimson warning type, and the CSS-only static
//! flicker. Every animation here runs in the stylesheet; no script timers.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* VOID (Backgrounds) */
  --void-black: #000000;
  --void-scrim: rgba(0, 0, 0, 0.9);

  /* BLOOD (Titles, Controls) */
  --crimson: #dc143c;
  --crimson-glow: rgba(220, 20, 60, 0.8);
  --crimson-haze: rgba(220, 20, 60, 0.6);
  --dark-red: #8b0000;
  --warning-red: #ff4444;

  /* TEXT */
  --text-muted: #999999;

  /* Typography */
  --font-display: 'Arial Black', sans-serif;
  --font-body: 'Arial', sans-serif;
  --font-mono: 'Courier New', monospace;

  /* Layers */
  --z-content: 10;
  --z-entry: 40;
  --z-static: 50;

  /* Transitions */
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  background: var(--void-black);
  overflow: hidden;
  -webkit-font-smoothing: antialiased;
}

/* === Stage === */
.gate {
  position: relative;
  min-height: 100vh;
  background: var(--void-black);
  display: flex;
  align-items: center;
  justify-content: center;
  overflow: hidden;
}

.gate-scrim {
  position: absolute;
  inset: 0;
  background: var(--void-scrim);
}

.gate-grain {
  position: absolute;
  inset: 0;
  opacity: 0.05;
  background-image: url("data:image/svg+xml,%3Csvg viewBox='0 0 400 400' xmlns='http://www.w3.org/2000/svg'%3E%3Cfilter id='noiseFilter'%3E%3CfeTurbulence type='fractalNoise' baseFrequency='0.9' numOctaves='4' seed='2' /%3E%3C/filter%3E%3Crect width='400' height='400' filter='url(%23noiseFilter)' /%3E%3C/svg%3E");
  background-size: 200px 200px;
}

.gate-content {
  position: relative;
  z-index: var(--z-content);
  width: 100%;
  height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
}

/* === Static Overlay === */
.static-overlay {
  position: absolute;
  inset: 0;
  z-index: var(--z-static);
  pointer-events: none;
  background-image: url("data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='100' height='100'%3E%3Cfilter id='noise'%3E%3CfeTurbulence type='fractalNoise' baseFrequency='0.9' numOctaves='4' /%3E%3C/filter%3E%3Crect width='100' height='100' fill='white' filter='url(%23noise)' opacity='0.3' /%3E%3C/svg%3E");
  animation: flicker 0.15s infinite;
}

@keyframes flicker {
  0% { opacity: 0.97; }
  5% { opacity: 0.1; }
  10% { opacity: 0.9; }
  15% { opacity: 0.1; }
  20% { opacity: 0.8; }
  25% { opacity: 0.1; }
  30% { opacity: 0.7; }
  100% { opacity: 0.1; }
}

/* === Video Stage === */
.video-stage {
  position: relative;
  width: 100%;
  height: 100%;
  max-width: 56rem;
  max-height: 100vh;
}

.gate-video {
  width: 100%;
  height: 100%;
  object-fit: cover;
  filter: brightness(1);
}

.gate-video.dimmed {
  filter: brightness(0.5) contrast(1.5);
}

/* === Warning Screen === */
.warning-screen {
  position: absolute;
  inset: 0;
  z-index: var(--z-entry);
  background: var(--void-black);
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
}

.warning-glow {
  position: absolute;
  inset: 0;
  opacity: 0.2;
  background: radial-gradient(circle, rgba(220, 20, 60, 0.3) 0%, transparent 70%);
  animation: pulse 2s ease-in-out infinite;
}

.warning-body {
  position: relative;
  z-index: var(--z-content);
  text-align: center;
  padding: 0 1.5rem;
}

.warning-title {
  font-family: var(--font-display);
  font-size: 3rem;
  font-weight: 900;
  letter-spacing: 0.1em;
  margin-bottom: 1.5rem;
  color: var(--crimson);
  text-shadow: 0 0 20px var(--crimson-glow), 0 0 40px rgba(0, 0, 0, 0.9);
  animation: glitch 0.3s ease-in-out infinite;
}

.warning-subtitle {
  font-family: var(--font-body);
  font-size: 1.125rem;
  font-weight: 700;
  margin-bottom: 3rem;
  color: var(--warning-red);
  text-shadow: 0 0 10px var(--crimson-haze);
}

.btn-enter {
  position: relative;
  padding: 1rem 2rem;
  font-family: var(--font-display);
  font-size: 1.25rem;
  font-weight: 900;
  text-transform: uppercase;
  letter-spacing: 0.1em;
  background: linear-gradient(135deg, var(--crimson) 0%, var(--dark-red) 100%);
  color: #000;
  text-shadow: 0 0 5px rgba(255, 255, 255, 0.5);
  box-shadow: 0 0 30px var(--crimson-glow), inset 0 0 20px rgba(255, 255, 255, 0.1);
  border: 3px solid var(--warning-red);
  cursor: pointer;
  transition: all var(--transition-normal);
  animation: pulse-button 1.5s ease-in-out infinite;
}

.btn-enter:hover {
  box-shadow: 0 0 50px rgba(220, 20, 60, 1), inset 0 0 30px rgba(255, 255, 255, 0.2);
}

.warning-footer {
  font-family: var(--font-mono);
  font-size: 0.875rem;
  margin-top: 2rem;
  opacity: 0.7;
  color: var(--text-muted);
}

@keyframes glitch {
  0% { transform: translate(0); }
  20% { transform: translate(-2px, 2px); }
  40% { transform: translate(-2px, -2px); }
  60% { transform: translate(2px, 2px); }
  80% { transform: translate(2px, -2px); }
  100% { transform: translate(0); }
}

@keyframes pulse-button {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.7; }
}

@keyframes pulse {
  0%, 100% { opacity: 0.2; }
  50% { opacity: 0.4; }
}

/* === Breakpoints === */
@media (min-width: 768px) {
  .warning-title { font-size: 4.5rem; }
  .warning-subtitle { font-size: 1.5rem; }
  .btn-enter {
    padding: 1.5rem 3rem;
    font-size: 1.5rem;
  }
  .warning-footer { font-size: 1rem; }
}
"#;
