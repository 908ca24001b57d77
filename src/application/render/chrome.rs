//! Page-level chrome emitted once per document: the shared responsive
//! stylesheet and the reflow script that hides the host page's own title.

/// Shared stylesheet. Accent-aware rules read the `--adv-accent` custom
/// property set on the root container.
pub(crate) const STYLESHEET: &str = r#"
.advertorial{max-width:720px;margin:0 auto;padding:0 16px;font-family:Georgia,'Times New Roman',serif;font-size:19px;line-height:1.6;color:#1d1d1f}
.advertorial .adv-block{margin:28px 0}
.advertorial h1{font-size:38px;line-height:1.15;margin:18px 0 10px;font-family:Helvetica,Arial,sans-serif}
.advertorial h2{font-size:26px;line-height:1.25;margin:14px 0 8px;font-family:Helvetica,Arial,sans-serif}
.advertorial h3{font-size:21px;margin:10px 0 6px;font-family:Helvetica,Arial,sans-serif}
.advertorial p{margin:0 0 14px}
.advertorial img{max-width:100%;height:auto;border-radius:8px;display:block}
.advertorial figcaption{font-size:14px;color:#6e6e73;margin-top:6px;text-align:center}
.advertorial .adv-subheadline{font-size:22px;color:#48484d;margin:0 0 8px}
.advertorial .adv-byline{display:flex;gap:10px;align-items:center;font-family:Helvetica,Arial,sans-serif;font-size:14px;color:#6e6e73;border-bottom:1px solid #e5e5ea;padding-bottom:12px}
.advertorial .adv-social-proof{background:#f5f5f7;border-radius:8px;padding:14px 18px;text-align:center;font-family:Helvetica,Arial,sans-serif}
.advertorial .adv-social-proof .adv-highlight{color:var(--adv-accent,#0a7d44);font-weight:700}
.advertorial .adv-stats{display:grid;grid-template-columns:repeat(auto-fit,minmax(140px,1fr));gap:14px;text-align:center}
.advertorial .adv-stat-value{font-size:32px;font-weight:800;color:var(--adv-accent,#0a7d44);font-family:Helvetica,Arial,sans-serif}
.advertorial .adv-stat-label{font-size:14px;color:#6e6e73}
.advertorial blockquote{margin:0;padding:16px 18px;background:#f5f5f7;border-left:4px solid var(--adv-accent,#0a7d44);border-radius:0 8px 8px 0}
.advertorial .adv-testimonial cite{display:block;margin-top:8px;font-style:normal;font-weight:700;font-size:15px}
.advertorial .adv-testimonial .adv-detail{font-weight:400;color:#6e6e73}
.advertorial .adv-numbered{display:flex;gap:16px}
.advertorial .adv-number{flex:0 0 auto;width:44px;height:44px;border-radius:50%;background:var(--adv-accent,#0a7d44);color:#fff;font-weight:800;font-size:22px;display:flex;align-items:center;justify-content:center;font-family:Helvetica,Arial,sans-serif}
.advertorial table{width:100%;border-collapse:collapse;font-family:Helvetica,Arial,sans-serif;font-size:16px}
.advertorial th,.advertorial td{padding:10px 12px;border:1px solid #e5e5ea;text-align:left}
.advertorial thead th{background:#f5f5f7}
.advertorial td.adv-us{color:var(--adv-accent,#0a7d44);font-weight:700}
.advertorial .adv-pros-cons{display:grid;grid-template-columns:1fr 1fr;gap:16px;font-family:Helvetica,Arial,sans-serif;font-size:16px}
.advertorial .adv-pros-cons ul{margin:6px 0 0;padding-left:20px}
.advertorial .adv-timeline{list-style:none;margin:0;padding:0;border-left:3px solid var(--adv-accent,#0a7d44)}
.advertorial .adv-timeline li{padding:0 0 16px 16px}
.advertorial .adv-timeline .adv-step-label{font-weight:700;font-family:Helvetica,Arial,sans-serif}
.advertorial .adv-guarantee{border:2px solid var(--adv-accent,#0a7d44);border-radius:12px;padding:20px;text-align:center}
.advertorial .adv-badge{display:inline-block;background:var(--adv-accent,#0a7d44);color:#fff;border-radius:999px;padding:2px 12px;font-size:13px;font-family:Helvetica,Arial,sans-serif;font-weight:700}
.advertorial hr{border:none;border-top:1px solid #e5e5ea;margin:8px 0}
.advertorial .adv-note{background:#fff8e6;border-radius:8px;padding:14px 18px;font-size:16px}
.advertorial details{border-bottom:1px solid #e5e5ea;padding:10px 0}
.advertorial summary{cursor:pointer;font-weight:700;font-family:Helvetica,Arial,sans-serif;font-size:17px}
.advertorial .adv-as-seen-in{text-align:center;color:#6e6e73;font-family:Helvetica,Arial,sans-serif;font-size:14px;letter-spacing:.08em;text-transform:uppercase}
.advertorial .adv-outlets span{margin:0 10px;font-weight:700}
.advertorial .adv-features{display:grid;grid-template-columns:repeat(auto-fit,minmax(200px,1fr));gap:14px;font-family:Helvetica,Arial,sans-serif;font-size:16px}
.advertorial .adv-feature::before{content:"\2713";color:var(--adv-accent,#0a7d44);font-weight:800;margin-right:8px}
.advertorial .adv-offer{border:2px dashed var(--adv-accent,#0a7d44);border-radius:12px;padding:20px;text-align:center}
.advertorial .adv-price{font-size:34px;font-weight:800;color:var(--adv-accent,#0a7d44);font-family:Helvetica,Arial,sans-serif}
.advertorial .adv-original-price{text-decoration:line-through;color:#6e6e73;font-size:20px;margin-right:8px}
.advertorial .adv-btn{display:inline-block;background:var(--adv-accent,#0a7d44);color:#fff;text-decoration:none;font-family:Helvetica,Arial,sans-serif;font-weight:800;font-size:18px;padding:14px 34px;border-radius:999px;margin-top:10px}
.advertorial .adv-cta{text-align:center;background:#f5f5f7;border-radius:12px;padding:24px}
.advertorial .adv-cta .adv-subtext{font-size:14px;color:#6e6e73;margin-top:8px}
.advertorial .adv-comment{border-bottom:1px solid #e5e5ea;padding:12px 0;font-size:16px}
.advertorial .adv-comment-meta{font-family:Helvetica,Arial,sans-serif;font-size:13px;color:#6e6e73}
.advertorial .adv-disclaimer{font-size:13px;color:#6e6e73;border-top:1px solid #e5e5ea;padding-top:14px}
.advertorial .adv-urgency{background:#b42318;color:#fff;text-align:center;border-radius:8px;padding:12px 16px;font-family:Helvetica,Arial,sans-serif;font-weight:700}
.advertorial .adv-urgency .adv-countdown{display:block;font-size:13px;font-weight:400;opacity:.85}
.advertorial .adv-tiers{display:grid;grid-template-columns:repeat(auto-fit,minmax(180px,1fr));gap:14px;font-family:Helvetica,Arial,sans-serif}
.advertorial .adv-tier{border:1px solid #e5e5ea;border-radius:12px;padding:18px;text-align:center}
.advertorial .adv-tier.adv-featured{border-color:var(--adv-accent,#0a7d44);border-width:2px}
@media(max-width:600px){
.advertorial{font-size:17px}
.advertorial h1{font-size:30px}
.advertorial h2{font-size:23px}
.advertorial .adv-pros-cons{grid-template-columns:1fr}
.advertorial .adv-numbered{flex-direction:column}
}
"#;

/// Hides the host page's own title element so the headline block is the only
/// page title the reader sees. Runs once per document.
pub(crate) const REFLOW_SCRIPT: &str = r#"<script>(function(){var sel=['h1.page-title','.page-title','.section-header__title','.main-page-title'];for(var i=0;i<sel.length;i++){var el=document.querySelector(sel[i]);if(el){el.style.display='none';break;}}})();</script>"#;
