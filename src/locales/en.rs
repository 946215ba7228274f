//! English text resources (en)

pub const ENTRIES: &[(&str, &str)] = &[
    // Navigation
    ("nav.home", "Home"),
    ("nav.interview", "AI Interview"),
    ("nav.analysis", "Interview Analysis"),
    ("nav.ielts", "IELTS Speaking"),
    ("nav.brand", "InterviewHelper"),
    ("nav.platform", "AI Interview Platform"),
    ("nav.logout", "Logout"),
    ("nav.assistant", "AI Assistant"),
    ("nav.dashboard", "Practice Records"),
    ("nav.report", "Analysis Report"),
    ("nav.guide", "User Guide"),

    // Home
    ("home.hero.title", "AI-Powered Interview Practice Platform"),
    (
        "home.hero.subtitle",
        "Enhance your interview skills with intelligent AI technology, get personalized feedback and professional advice",
    ),
    ("home.hero.cta.guide", "User Guide"),
    ("home.hero.cta.interview", "Start AI Interview"),
    ("home.stats.users", "Users"),
    ("home.stats.interviews", "Interviews"),
    ("home.stats.rating", "Rating"),
    ("home.stats.accuracy", "Accuracy"),
    ("home.features.interview.title", "AI Mock Interview"),
    (
        "home.features.interview.desc",
        "Engage in realistic interview conversations with AI, supporting multiple interview modes",
    ),
    ("home.features.analysis.title", "Interview Analysis Report"),
    (
        "home.features.analysis.desc",
        "Deep analysis of your performance with suggestions on speed, vocabulary, logic and more",
    ),
    ("home.features.ielts.title", "IELTS Speaking Evaluation"),
    (
        "home.features.ielts.desc",
        "Professional IELTS speaking scoring system with detailed ability analysis",
    ),
    ("home.features.learn_more", "Learn More"),
    ("home.cta.title", "Ready to Enhance Your Interview Skills?"),
    (
        "home.cta.subtitle",
        "Start your AI interview practice journey now and get professional feedback and advice",
    ),
    ("home.cta.button", "Get Started"),

    // Guide
    ("guide.title", "User Guide"),
    (
        "guide.subtitle",
        "Learn about three interview modes and choose the best practice method for you",
    ),
    ("guide.back", "Back to Home"),
    ("guide.modes.title", "Interview Mode Introduction"),
    ("guide.modes.voice.title", "Voice Mode"),
    ("guide.modes.voice.desc", "Manual microphone control with start/stop recording"),
    ("guide.modes.voice.feature1", "Manual recording control"),
    ("guide.modes.voice.feature2", "Suitable for quiet environments"),
    ("guide.modes.voice.feature3", "Precise answer content control"),
    ("guide.modes.screen.title", "Screen Share Mode"),
    ("guide.modes.screen.desc", "Capture system audio with automatic voice detection"),
    ("guide.modes.screen.feature1", "Auto-detect voice start and end"),
    ("guide.modes.screen.feature2", "System audio capture support"),
    ("guide.modes.screen.feature3", "Suitable for online interview scenarios"),
    ("guide.modes.advanced.title", "Advanced Mode"),
    ("guide.modes.advanced.desc", "Question detection only, filtering noise and fillers"),
    ("guide.modes.advanced.feature1", "Smart background noise filtering"),
    ("guide.modes.advanced.feature2", "Automatic question content recognition"),
    ("guide.modes.advanced.feature3", "Reduce filler word interference"),
    ("guide.setup.title", "Setup Steps"),
    ("guide.steps.1.title", "Browser Setup"),
    (
        "guide.steps.1.desc",
        "Chrome browser recommended, ensure microphone permissions are enabled",
    ),
    ("guide.steps.2.title", "Audio Configuration"),
    ("guide.steps.2.desc", "Adjust microphone volume, ensure audio is clear and audible"),
    ("guide.steps.3.title", "Environment Preparation"),
    ("guide.steps.3.desc", "Choose a quiet environment to reduce background noise interference"),
    ("guide.browser.title", "Browser Compatibility"),
    (
        "guide.browser.desc",
        "For the best experience, please use Chrome browser and ensure it is the latest version. Safari and Firefox may have compatibility issues.",
    ),
    ("guide.cta", "Start Interview"),

    // Login
    ("login.phone.title", "Phone Verification Login"),
    ("login.phone.subtitle", "Please enter your phone number to receive verification code"),
    ("login.phone.label", "Phone Number"),
    ("login.phone.placeholder", "Enter 11-digit phone number"),
    ("login.phone.button", "Send Code"),
    ("login.phone.error", "Please enter a valid phone number"),
    ("login.phone.send_failed", "Failed to send verification code, please try again"),
    ("login.phone.security", "Your information will be securely protected"),
    ("login.verify.title", "Enter Verification Code"),
    ("login.verify.subtitle", "Verification code sent to"),
    ("login.verify.label", "Verification Code"),
    ("login.verify.placeholder", "Enter 6-digit code"),
    ("login.verify.button", "Login"),
    ("login.verify.error", "Please enter 6-digit verification code"),
    ("login.verify.wrong", "Incorrect verification code, please try again"),
    ("login.verify.back", "Re-enter phone number"),
    ("login.verify.help", "Didn't receive the code? Please check SMS or try again later"),

    // Mode selection
    ("mode.title", "Select Interview Mode"),
    (
        "mode.subtitle",
        "Choose the appropriate interview mode and configuration based on your needs",
    ),
    ("mode.remaining_time", "Remaining Time"),
    ("mode.select_mode", "Select Interview Mode"),
    ("mode.voice.title", "Voice Mode"),
    ("mode.voice.desc", "Manual recording control, suitable for quiet environments"),
    ("mode.screen.title", "Screen Share Mode"),
    ("mode.screen.desc", "Auto voice detection, system audio support"),
    ("mode.advanced.title", "Advanced Mode"),
    ("mode.advanced.desc", "Smart filtering, question detection only"),
    ("mode.config.title", "Interview Configuration"),
    ("mode.config.resume", "Resume Upload"),
    ("mode.config.resume_upload", "Click or drag to upload resume file"),
    ("mode.config.language", "Interview Language"),
    ("mode.config.chinese", "Mandarin"),
    ("mode.config.english", "English"),
    ("mode.config.position", "Position"),
    ("mode.config.position_placeholder", "e.g., Frontend Engineer"),
    ("mode.config.is_it", "Is this an IT interview?"),
    ("mode.config.pause_duration", "Pause Duration"),
    ("mode.config.additional_info", "Additional Information"),
    ("mode.config.additional_info_placeholder", "Enter other relevant information..."),
    ("mode.config.custom_prompt", "Custom Prompt"),
    ("mode.config.custom_prompt_placeholder", "Enter custom prompt link"),
    ("mode.start_interview", "Start Interview"),

    // Interview
    ("interview.session_title", "AI Interview Session"),
    ("interview.position", "Position"),
    ("interview.mode", "Mode"),
    ("interview.end", "End Interview"),
    (
        "interview.welcome_message",
        "Hello! I'm your AI interviewer. Today we'll conduct an interview for the {position} position. Please start by introducing yourself.",
    ),
    ("interview.start_recording", "Start Recording"),
    ("interview.stop_recording", "Stop Recording"),
    ("interview.voice_mode_tip", "Click to start recording, click stop when finished"),

    // Analysis
    ("analysis.title", "AI Interview Analysis Report"),
    (
        "analysis.subtitle",
        "Based on your interview performance, we provide detailed analysis reports",
    ),
    ("analysis.overall_score", "Overall Score"),
    ("analysis.performance_title", "Interview Performance Assessment"),
    ("analysis.performance_desc", "Comprehensive analysis results based on multiple dimensions"),
    ("analysis.speed.title", "Speaking Speed"),
    (
        "analysis.speed.feedback",
        "Your speaking speed is moderate with clear and fluent expression",
    ),
    (
        "analysis.speed.suggestion",
        "Consider slowing down at key points to enhance expression effectiveness",
    ),
    ("analysis.vocabulary.title", "Vocabulary"),
    ("analysis.vocabulary.feedback", "Rich vocabulary usage with appropriate technical terms"),
    ("analysis.vocabulary.suggestion", "Further expand the use of advanced vocabulary"),
    ("analysis.logic.title", "Logic"),
    ("analysis.logic.feedback", "Clear logical thinking with well-structured answers"),
    ("analysis.logic.suggestion", "Continue maintaining good logical expression habits"),
    ("analysis.clarity.title", "Structural Clarity"),
    ("analysis.clarity.feedback", "Clear answer structure with highlighted key points"),
    ("analysis.clarity.suggestion", "Use more connecting words to enhance expression coherence"),
    ("analysis.feedback_label", "Feedback"),
    ("analysis.suggestion_label", "Suggestion"),
    ("analysis.view_report", "View Detailed Report"),
    ("analysis.new_interview", "Start New Interview"),

    // Report
    ("report.interview_report", "Interview Assessment Report"),
    ("report.date", "Interview Date"),
    ("report.duration", "Duration"),
    ("report.role", "Position"),
    ("report.overall_score", "Overall Score"),
    ("report.detailed_scores", "Detailed Scores"),
    ("report.strengths_title", "Strengths"),
    (
        "report.strengths.logical_thinking",
        "Clear logical thinking with organized expression of viewpoints",
    ),
    (
        "report.strengths.clear_expression",
        "Clear expression with strong language organization skills",
    ),
    (
        "report.strengths.technical_knowledge",
        "Solid professional knowledge with deep technical understanding",
    ),
    ("report.weaknesses_title", "Areas for Improvement"),
    (
        "report.weaknesses.speaking_speed",
        "Speaking speed is fast, suggest slowing down for better understanding",
    ),
    ("report.weaknesses.vocabulary_diversity", "Vocabulary diversity needs improvement"),
    ("report.weaknesses.filler_words", "Frequent use of filler words affects expression fluency"),
    ("report.suggestions_title", "Improvement Suggestions"),
    (
        "report.suggestions.practice_speaking",
        "Practice speaking more to improve natural expression",
    ),
    (
        "report.suggestions.expand_vocabulary",
        "Expand professional vocabulary to enhance expression accuracy",
    ),
    (
        "report.suggestions.reduce_fillers",
        "Reduce use of filler words for more concise expression",
    ),
    (
        "report.suggestions.structure_answers",
        "Strengthen answer structure using introduction-body-conclusion format",
    ),
    ("report.download", "Download Report"),
    ("report.share", "Share Report"),

    // IELTS
    ("ielts.title", "IELTS Speaking Evaluation"),
    (
        "ielts.subtitle",
        "Professional IELTS speaking scoring system with five-dimensional detailed analysis",
    ),
    ("ielts.parts.part1.title", "Part 1 - Personal Information"),
    ("ielts.parts.part1.desc", "Simple Q&A about personal, family, work, study topics"),
    ("ielts.parts.part2.title", "Part 2 - Individual Presentation"),
    ("ielts.parts.part2.desc", "1-2 minute individual presentation on a given topic"),
    ("ielts.parts.part3.title", "Part 3 - In-depth Discussion"),
    ("ielts.parts.part3.desc", "In-depth discussion of abstract topics related to Part 2"),
    ("ielts.sample_question", "Sample Question"),
    ("ielts.start_recording", "Start Recording"),
    ("ielts.stop_recording", "Stop Recording"),
    ("ielts.recording_in_progress", "Recording in Progress"),
    ("ielts.sample_questions.part1.q1", "Please introduce your hometown"),
    ("ielts.sample_questions.part1.q2", "What hobbies do you have?"),
    ("ielts.sample_questions.part1.q3", "Do you think learning English is important?"),
    (
        "ielts.sample_questions.part2.q1",
        "Describe a person who has had an important influence on you",
    ),
    ("ielts.sample_questions.part2.q2", "Talk about a memorable travel experience"),
    ("ielts.sample_questions.part2.q3", "Describe a skill you would like to learn"),
    (
        "ielts.sample_questions.part3.q1",
        "How do you think modern technology affects interpersonal communication?",
    ),
    ("ielts.sample_questions.part3.q2", "How should education systems adapt to changing times?"),
    (
        "ielts.sample_questions.part3.q3",
        "What impact does globalization have on cultural diversity?",
    ),
    ("ielts.results.title", "IELTS Speaking Test Results"),
    ("ielts.results.band_score", "Band Score"),
    ("ielts.results.excellent", "Excellent Performance!"),
    ("ielts.results.feedback", "Your speaking level has reached a good standard, keep it up!"),
    ("ielts.results.detailed_analysis", "Detailed Ability Analysis"),
    ("ielts.results.suggestions_title", "Improvement Suggestions"),
    (
        "ielts.results.suggestion1",
        "Strengthen pronunciation and intonation practice to improve accuracy",
    ),
    ("ielts.results.suggestion2", "Expand vocabulary, especially academic and formal vocabulary"),
    (
        "ielts.results.suggestion3",
        "Practice using complex sentence structures to improve grammatical variety",
    ),
    ("ielts.results.try_again", "Try Again"),
    ("ielts.results.view_report", "View Detailed Report"),
    ("ielts.radar.fluency", "Fluency"),
    ("ielts.radar.vocabulary", "Vocabulary"),
    ("ielts.radar.grammar", "Grammar"),
    ("ielts.radar.pronunciation", "Pronunciation"),
    ("ielts.radar.coherence", "Coherence"),

    // Footer
    ("footer.contact", "Contact Us"),
    ("footer.bilibili", "Bilibili"),
    ("footer.douyin", "Douyin"),
    ("footer.xiaohongshu", "Xiaohongshu"),
    ("footer.rights", "All Rights Reserved"),
];
