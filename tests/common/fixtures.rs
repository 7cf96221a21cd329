//! Test fixtures for BBS post payloads
//!
//! This module provides realistic sample posts in the shapes the loader
//! accepts, for use in tests.

use serde_json::{Value, json};

/// Wrap a post record in a full `getPostFull` response.
pub fn post_response(post: Value) -> Value {
  json!({
    "retcode": 0,
    "message": "OK",
    "data": {
      "post": {
        "post": post
      }
    }
  })
}

/// Encode operations the way `structured_content` stores them.
pub fn encode(operations: Value) -> String {
  operations.to_string()
}

// Article post with styled text, links and a divider
pub fn sample_article_response() -> Value {
  post_response(json!({
    "post_id": "540893019",
    "subject": "Version 4.2 preview",
    "content": "<p>legacy markup is ignored</p>",
    "structured_content": encode(json!([
      {"insert": "Welcome, Traveler!", "attributes": {"bold": true, "color": "#ff0000"}},
      {"insert": "\n"},
      {"insert": "Hidden ink", "attributes": {"color": "#ece5d8"}},
      {"insert": "Related article", "attributes": {"link": "https://www.miyoushe.com/ys/article/12345"}},
      {"insert": "Official site", "attributes": {"link": "https://genshin.hoyoverse.com/"}},
      {"insert": {"divider": "line_2"}},
      {"insert": {"image": "https://upload-bbs.mihoyo.com/cover.png"}, "attributes": {"width": 690, "height": 320}}
    ]))
  }))
}

// Picture post whose content is a `{describe, imgs}` object
pub fn sample_picture_post() -> Value {
  json!({
    "post": {
      "post_id": "1001",
      "subject": "Fan art",
      "content": json!({
        "describe": "Drew this over the weekend",
        "imgs": ["https://upload-bbs.mihoyo.com/a.png", "https://upload-bbs.mihoyo.com/b.png"]
      }).to_string(),
      "structured_content": ""
    }
  })
}

// Post exercising every embed shape
pub fn sample_embeds_post() -> Value {
  json!({
    "post_id": "2002",
    "subject": "Embeds",
    "content": "<p></p>",
    "structured_content": encode(json!([
      {"insert": {"vod": {
        "cover": "https://upload-bbs.mihoyo.com/poster.jpg",
        "resolutions": [
          {"url": "https://v.mihoyo.com/720.mp4", "format": ".mp4", "size": "2000", "definition": "720P"},
          {"url": "https://v.mihoyo.com/1080.mp4", "format": ".mp4", "size": 5000, "definition": "1080P"},
          {"url": "https://v.mihoyo.com/480.m3u8", "format": ".m3u8", "size": 9000, "definition": "480P"}
        ]
      }}},
      {"insert": {"video": "https://player.bilibili.com/player.html?bvid=BV1xx"}},
      {"insert": {"mention": {"uid": 75276539, "nickname": "Paimon"}}},
      {"insert": {"link_card": {
        "cover": "https://upload-bbs.mihoyo.com/card.png",
        "title": "<span>Welkin Moon</span>",
        "price": 30,
        "origin_url": "https://bbs.mihoyo.com/ys/article/777"
      }}},
      {"insert": {"backup_text": "[抽奖]", "lottery": {"id": "88", "toast": "Enter the draw"}}},
      {"insert": {"poll": {"id": 1}}}
    ]))
  })
}

// Post with a fold nested inside another fold
pub fn sample_nested_fold_post() -> Value {
  let inner = json!([
    {"insert": {"backup_text": "[折叠]", "fold": {
      "title": encode(json!([{"insert": "Inner"}])),
      "content": encode(json!([{"insert": "Deepest text"}]))
    }}}
  ]);

  json!({
    "post_id": "3003",
    "subject": "Spoilers",
    "content": "<p></p>",
    "structured_content": encode(json!([
      {"insert": {"backup_text": "[折叠]", "fold": {
        "title": encode(json!([{"insert": "Spoilers", "attributes": {"bold": true}}])),
        "content": encode(inner)
      }}},
      {"insert": "After the fold"}
    ]))
  })
}

// Post whose structured content is truncated JSON
pub fn sample_broken_post() -> Value {
  json!({
    "post_id": "4004",
    "subject": "Broken",
    "content": "<p></p>",
    "structured_content": "[{\"insert\": \"cut off"
  })
}
