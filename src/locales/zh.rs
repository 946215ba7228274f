//! 简体中文文本资源 (zh)

pub const ENTRIES: &[(&str, &str)] = &[
    // 导航
    ("nav.home", "首页"),
    ("nav.interview", "AI面试"),
    ("nav.analysis", "面试分析"),
    ("nav.ielts", "IELTS口语"),
    ("nav.brand", "面试助手"),
    ("nav.platform", "AI面试平台"),
    ("nav.logout", "退出登录"),
    ("nav.assistant", "AI辅助"),
    ("nav.dashboard", "练习记录"),
    ("nav.report", "分析报告"),
    ("nav.guide", "使用指南"),

    // 首页
    ("home.hero.title", "AI驱动的面试练习平台"),
    ("home.hero.subtitle", "通过智能AI技术提升您的面试技能，获得个性化反馈和专业建议"),
    ("home.hero.cta.guide", "使用指南"),
    ("home.hero.cta.interview", "进入AI面试"),
    ("home.stats.users", "用户"),
    ("home.stats.interviews", "面试次数"),
    ("home.stats.rating", "用户评分"),
    ("home.stats.accuracy", "准确率"),
    ("home.features.interview.title", "AI模拟面试"),
    ("home.features.interview.desc", "与AI进行真实的面试对话，支持多种面试模式"),
    ("home.features.analysis.title", "面试分析报告"),
    ("home.features.analysis.desc", "深度分析您的表现，从语速、词汇、逻辑等维度给出建议"),
    ("home.features.ielts.title", "IELTS口语评测"),
    ("home.features.ielts.desc", "专业的雅思口语评分系统，提供详细的能力分析"),
    ("home.features.learn_more", "了解更多"),
    ("home.cta.title", "准备好提升您的面试技能了吗？"),
    ("home.cta.subtitle", "立即开始您的AI面试练习之旅，获得专业的反馈和建议"),
    ("home.cta.button", "立即开始"),

    // 使用指南
    ("guide.title", "使用指南"),
    ("guide.subtitle", "了解三种面试模式，选择最适合您的练习方式"),
    ("guide.back", "返回首页"),
    ("guide.modes.title", "面试模式介绍"),
    ("guide.modes.voice.title", "语音模式"),
    ("guide.modes.voice.desc", "通过麦克风输入，手动控制录音开始和结束"),
    ("guide.modes.voice.feature1", "手动控制录音时机"),
    ("guide.modes.voice.feature2", "适合安静环境使用"),
    ("guide.modes.voice.feature3", "精确控制回答内容"),
    ("guide.modes.screen.title", "共享屏幕模式"),
    ("guide.modes.screen.desc", "捕获系统音频，自动检测语音活动"),
    ("guide.modes.screen.feature1", "自动检测语音开始和结束"),
    ("guide.modes.screen.feature2", "支持系统音频捕获"),
    ("guide.modes.screen.feature3", "适合在线面试场景"),
    ("guide.modes.advanced.title", "高级模式"),
    ("guide.modes.advanced.desc", "仅检测问题，过滤噪音和口头禅"),
    ("guide.modes.advanced.feature1", "智能过滤背景噪音"),
    ("guide.modes.advanced.feature2", "自动识别问题内容"),
    ("guide.modes.advanced.feature3", "减少口头禅干扰"),
    ("guide.setup.title", "设置步骤"),
    ("guide.steps.1.title", "浏览器设置"),
    ("guide.steps.1.desc", "推荐使用Chrome浏览器，确保麦克风权限已开启"),
    ("guide.steps.2.title", "音频配置"),
    ("guide.steps.2.desc", "调整麦克风音量，确保音频清晰可听"),
    ("guide.steps.3.title", "环境准备"),
    ("guide.steps.3.desc", "选择安静的环境，减少背景噪音干扰"),
    ("guide.browser.title", "浏览器兼容性"),
    ("guide.browser.desc", "为了获得最佳体验，请使用Chrome浏览器，并确保版本为最新版本。Safari和Firefox可能存在兼容性问题。"),
    ("guide.cta", "开始面试"),

    // 登录
    ("login.phone.title", "手机验证登录"),
    ("login.phone.subtitle", "请输入您的手机号码以接收验证码"),
    ("login.phone.label", "手机号码"),
    ("login.phone.placeholder", "请输入11位手机号"),
    ("login.phone.button", "发送验证码"),
    ("login.phone.error", "请输入正确的手机号码"),
    ("login.phone.send_failed", "验证码发送失败，请重试"),
    ("login.phone.security", "您的信息将被安全保护"),
    ("login.verify.title", "输入验证码"),
    ("login.verify.subtitle", "验证码已发送至"),
    ("login.verify.label", "验证码"),
    ("login.verify.placeholder", "请输入6位验证码"),
    ("login.verify.button", "登录"),
    ("login.verify.error", "请输入6位验证码"),
    ("login.verify.wrong", "验证码错误，请重新输入"),
    ("login.verify.back", "重新输入手机号"),
    ("login.verify.help", "没有收到验证码？请检查短信或稍后重试"),

    // 模式选择
    ("mode.title", "选择面试模式"),
    ("mode.subtitle", "根据您的需求选择合适的面试模式和配置"),
    ("mode.remaining_time", "剩余时间"),
    ("mode.select_mode", "选择面试模式"),
    ("mode.voice.title", "语音模式"),
    ("mode.voice.desc", "手动控制录音，适合安静环境"),
    ("mode.screen.title", "共享屏幕模式"),
    ("mode.screen.desc", "自动检测语音，支持系统音频"),
    ("mode.advanced.title", "高级模式"),
    ("mode.advanced.desc", "智能过滤，仅检测问题"),
    ("mode.config.title", "面试配置"),
    ("mode.config.resume", "简历上传"),
    ("mode.config.resume_upload", "点击或拖拽上传简历文件"),
    ("mode.config.language", "面试语言"),
    ("mode.config.chinese", "普通话"),
    ("mode.config.english", "英语"),
    ("mode.config.position", "应聘岗位"),
    ("mode.config.position_placeholder", "例如：前端工程师"),
    ("mode.config.is_it", "是否为IT面试？"),
    ("mode.config.pause_duration", "断句时长"),
    ("mode.config.additional_info", "补充信息"),
    ("mode.config.additional_info_placeholder", "请输入其他相关信息..."),
    ("mode.config.custom_prompt", "自定义Prompt"),
    ("mode.config.custom_prompt_placeholder", "输入自定义提示词链接"),
    ("mode.start_interview", "开始面试"),

    // 面试
    ("interview.session_title", "AI面试会话"),
    ("interview.position", "岗位"),
    ("interview.mode", "模式"),
    ("interview.end", "结束面试"),
    ("interview.welcome_message", "您好！我是您的AI面试官。今天我们将进行{position}岗位的面试。请先简单介绍一下自己。"),
    ("interview.start_recording", "开始录音"),
    ("interview.stop_recording", "停止录音"),
    ("interview.voice_mode_tip", "点击开始录音，说完后点击停止"),

    // 分析
    ("analysis.title", "AI面试分析报告"),
    ("analysis.subtitle", "基于您的面试表现，我们为您提供详细的分析报告"),
    ("analysis.overall_score", "综合评分"),
    ("analysis.performance_title", "面试表现评估"),
    ("analysis.performance_desc", "基于多个维度的综合分析结果"),
    ("analysis.speed.title", "语速"),
    ("analysis.speed.feedback", "您的语速适中，表达清晰流畅"),
    ("analysis.speed.suggestion", "建议在关键点适当放慢语速以增强表达效果"),
    ("analysis.vocabulary.title", "词汇"),
    ("analysis.vocabulary.feedback", "词汇使用较为丰富，专业术语运用得当"),
    ("analysis.vocabulary.suggestion", "可以进一步扩展高级词汇的使用"),
    ("analysis.logic.title", "逻辑"),
    ("analysis.logic.feedback", "逻辑思维清晰，回答结构合理"),
    ("analysis.logic.suggestion", "继续保持良好的逻辑表达习惯"),
    ("analysis.clarity.title", "结构清晰度"),
    ("analysis.clarity.feedback", "回答结构清晰，重点突出"),
    ("analysis.clarity.suggestion", "可以使用更多的连接词来增强表达的连贯性"),
    ("analysis.feedback_label", "反馈"),
    ("analysis.suggestion_label", "建议"),
    ("analysis.view_report", "查看详细报告"),
    ("analysis.new_interview", "开始新面试"),

    // 报告
    ("report.interview_report", "面试评估报告"),
    ("report.date", "面试日期"),
    ("report.duration", "面试时长"),
    ("report.role", "面试岗位"),
    ("report.overall_score", "综合得分"),
    ("report.detailed_scores", "详细评分"),
    ("report.strengths_title", "优势表现"),
    ("report.strengths.logical_thinking", "逻辑思维清晰，能够有条理地表达观点"),
    ("report.strengths.clear_expression", "表达清晰，语言组织能力强"),
    ("report.strengths.technical_knowledge", "专业知识扎实，技术理解深入"),
    ("report.weaknesses_title", "待改进项"),
    ("report.weaknesses.speaking_speed", "语速偏快，建议适当放慢以增强理解"),
    ("report.weaknesses.vocabulary_diversity", "词汇多样性有待提升"),
    ("report.weaknesses.filler_words", "口头禅使用较多，影响表达流畅度"),
    ("report.suggestions_title", "改进建议"),
    ("report.suggestions.practice_speaking", "多进行口语练习，提高表达的自然度"),
    ("report.suggestions.expand_vocabulary", "扩展专业词汇量，提升表达的准确性"),
    ("report.suggestions.reduce_fillers", "减少口头禅的使用，让表达更加简洁"),
    ("report.suggestions.structure_answers", "加强回答的结构化，使用总分总的表达方式"),
    ("report.download", "下载报告"),
    ("report.share", "分享报告"),

    // IELTS
    ("ielts.title", "IELTS口语评测"),
    ("ielts.subtitle", "专业的雅思口语评分系统，提供五维度详细分析"),
    ("ielts.parts.part1.title", "Part 1 - 个人信息"),
    ("ielts.parts.part1.desc", "关于个人、家庭、工作、学习等话题的简单问答"),
    ("ielts.parts.part2.title", "Part 2 - 个人陈述"),
    ("ielts.parts.part2.desc", "根据给定话题进行1-2分钟的个人陈述"),
    ("ielts.parts.part3.title", "Part 3 - 深入讨论"),
    ("ielts.parts.part3.desc", "与Part 2相关的抽象话题深入讨论"),
    ("ielts.sample_question", "示例问题"),
    ("ielts.start_recording", "开始录音"),
    ("ielts.stop_recording", "停止录音"),
    ("ielts.recording_in_progress", "录音进行中"),
    ("ielts.sample_questions.part1.q1", "请介绍一下您的家乡"),
    ("ielts.sample_questions.part1.q2", "您平时有什么爱好？"),
    ("ielts.sample_questions.part1.q3", "您觉得学习英语重要吗？"),
    ("ielts.sample_questions.part2.q1", "描述一个对您有重要影响的人"),
    ("ielts.sample_questions.part2.q2", "谈论一次难忘的旅行经历"),
    ("ielts.sample_questions.part2.q3", "描述一个您想学习的技能"),
    ("ielts.sample_questions.part3.q1", "您认为现代科技如何影响人际交往？"),
    ("ielts.sample_questions.part3.q2", "教育系统应该如何适应时代变化？"),
    ("ielts.sample_questions.part3.q3", "全球化对文化多样性有什么影响？"),
    ("ielts.results.title", "IELTS口语评测结果"),
    ("ielts.results.band_score", "雅思分数"),
    ("ielts.results.excellent", "优秀表现！"),
    ("ielts.results.feedback", "您的口语水平达到了良好标准，继续保持！"),
    ("ielts.results.detailed_analysis", "详细能力分析"),
    ("ielts.results.suggestions_title", "改进建议"),
    ("ielts.results.suggestion1", "加强语音语调的练习，提高发音的准确性"),
    ("ielts.results.suggestion2", "扩展词汇量，特别是学术和正式场合的词汇"),
    ("ielts.results.suggestion3", "练习复杂句型的使用，提高语法的多样性"),
    ("ielts.results.try_again", "重新测试"),
    ("ielts.results.view_report", "查看详细报告"),
    ("ielts.radar.fluency", "流利度"),
    ("ielts.radar.vocabulary", "词汇"),
    ("ielts.radar.grammar", "语法"),
    ("ielts.radar.pronunciation", "发音"),
    ("ielts.radar.coherence", "连贯性"),

    // 页脚
    ("footer.contact", "联系我们"),
    ("footer.bilibili", "B站"),
    ("footer.douyin", "抖音"),
    ("footer.xiaohongshu", "小红书"),
    ("footer.rights", "版权所有"),
];
